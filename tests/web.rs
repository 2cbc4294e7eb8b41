//! ブラウザ上でのスモークテスト (`wasm-pack test --headless --firefox`)。
#![cfg(target_arch = "wasm32")]

use ecs_wasm_solitaire::{GameConfig, InteractionController, PressOutcome, Variant};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn deal_with_browser_entropy() {
    // シード無し → getrandom (js) から乱数を取る
    let mut controller = InteractionController::new(GameConfig::new(Variant::Klondike));
    controller.setup();
    assert_eq!(controller.board().card_count(), 52);
    assert!(controller.board().check_partition().is_ok());
}

#[wasm_bindgen_test]
fn frame_serializes_in_browser() {
    let mut controller = InteractionController::new(GameConfig::new(Variant::TenPile).with_seed(8));
    controller.setup();
    assert_eq!(controller.on_pointer_press(-10.0, -10.0), PressOutcome::Nothing);
    let json = serde_json::to_string(&controller.on_draw()).expect("JSON にできるはず");
    assert!(json.contains("\"cards\""));
}

//! ゲームの勝利条件判定ロジックを定義するよ。

/// 全部のカードが組札に乗っていればクリア。
pub fn check_win_condition(foundation_card_count: usize, total_card_count: usize) -> bool {
    total_card_count > 0 && foundation_card_count == total_card_count
}

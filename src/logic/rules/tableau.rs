//! 場札 (Tableau) へのカード移動ルールを定義するよ。

use log::debug;

use crate::components::card::Card;
use crate::ecs::entity::Entity;
use crate::ecs::world::World;

/// 持ち上げた束の一番下のカード (`card_to_move_entity`) を、一番上が
/// `target_top_card_entity` の場札に置けるかチェックする。
///
/// - 場札が空 (`None`) なら何でも置ける。
/// - そうでなければ、ランクがちょうど 1 つ下のときだけ置ける。スートや色は見ない。
pub fn can_move_to_tableau(
    world: &World,
    card_to_move_entity: Entity,
    target_top_card_entity: Option<Entity>,
) -> bool {
    let Some(card_to_move) = world.get_component::<Card>(card_to_move_entity) else {
        debug!("[Tableau Rule] No Card component for {:?}", card_to_move_entity);
        return false;
    };

    let Some(top_entity) = target_top_card_entity else {
        debug!("[Tableau Rule] Moving {} onto empty tableau: allowed", card_to_move.label());
        return true;
    };

    let Some(target_top_card) = world.get_component::<Card>(top_entity) else {
        debug!("[Tableau Rule] No Card component for top entity {:?}", top_entity);
        return false;
    };

    let result = card_to_move.rank.is_one_below(target_top_card.rank);
    debug!(
        "[Tableau Rule] Moving {} onto {}: rank is one less = {}",
        card_to_move.label(),
        target_top_card.label(),
        result
    );
    result
}

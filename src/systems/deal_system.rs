// src/systems/deal_system.rs

use log::{debug, info};
use rand::Rng;

use crate::app::layout_calculator;
use crate::board::{Board, Pile};
use crate::components::{PileId, PileKind};
use crate::config::Variant;
use crate::logic::deck::{create_deck, shuffle_deck};

// === 初期カード配置システム！ ===
// ゲーム開始時 (とリスタート時) に、山札と場札にカードを配る役割を担うシステムだよ。
pub struct DealInitialCardsSystem {
    variant: Variant,
}

impl DealInitialCardsSystem {
    pub fn new(variant: Variant) -> Self {
        Self { variant }
    }

    /// ゲームの初期カード配置を実行する関数だよ！ 🎉
    ///
    /// # 処理の流れ
    /// 1. 盤面のカードを全部捨てる (リスタートでも同じ処理を通る🧹)。
    /// 2. バリアントのデッキ数ぶんのカードを作ってシャッフルする。
    /// 3. 全部いったん山札に裏向きで積む。
    /// 4. 山札の上から場札に配る。各列の枚数はバリアントが決める
    ///    (Klondike なら 1, 2, ..., 7 枚)。
    /// 5. 各場札の一番上だけ表にする。残りは山札に裏向きのまま。
    pub fn execute<R: Rng + ?Sized>(&self, board: &mut Board, rng: &mut R) {
        board.clear();

        let mut deck = create_deck(self.variant.deck_count());
        shuffle_deck(&mut deck, rng);
        info!("🃏 デッキ作成完了！ ({}枚)", deck.len());

        let Some(stock) = board.stock().map(Pile::id) else {
            return;
        };
        for card in deck {
            board.spawn_card(card, stock);
        }

        let tableau: Vec<PileId> = board.piles_of_kind(PileKind::Tableau).map(Pile::id).collect();
        for (pile, count) in tableau.into_iter().zip(self.variant.tableau_deal()) {
            self.place_cards(board, stock, pile, count);
            board.flip_top_face_up(pile);
        }
        info!(
            "✅ 配り終わり！ 山札に残り {} 枚",
            board.stock().map_or(0, Pile::len)
        );
    }

    /// 山札の上から `count` 枚を `pile` に積む。
    fn place_cards(&self, board: &mut Board, stock: PileId, pile: PileId, count: usize) {
        for _ in 0..count {
            let Some(card) = board.pile(stock).and_then(Pile::top_card) else {
                return;
            };
            let Some(position) = layout_calculator::next_card_position(board, pile) else {
                return;
            };
            if board.move_card_to_pile(card, pile) {
                board.set_position(card, position);
                board.pull_to_top(card);
            }
        }
        debug!("  {} に {} 枚配置", pile, count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::Card;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn dealt_board(variant: Variant, seed: u64) -> Board {
        let mut board = Board::new(variant);
        let mut rng = StdRng::seed_from_u64(seed);
        DealInitialCardsSystem::new(variant).execute(&mut board, &mut rng);
        board
    }

    fn face_up(board: &Board, pile: &Pile) -> Vec<bool> {
        pile.cards()
            .iter()
            .map(|&e| board.card(e).map_or(false, |c| c.is_face_up))
            .collect()
    }

    #[test]
    fn klondike_deal() {
        let board = dealt_board(Variant::Klondike, 1);
        assert_eq!(board.card_count(), 52);

        for (i, pile) in board.piles_of_kind(PileKind::Tableau).enumerate() {
            assert_eq!(pile.len(), i + 1, "{} 列目は {} 枚", i + 1, i + 1);
            let flags = face_up(&board, pile);
            assert_eq!(flags.last(), Some(&true), "一番上だけ表");
            assert!(flags[..i].iter().all(|up| !up), "下のカードは裏");
        }

        let stock = board.stock().expect("山札");
        assert_eq!(stock.len(), 24);
        assert!(face_up(&board, stock).iter().all(|up| !up), "山札は全部裏");
        assert!(board.piles_of_kind(PileKind::Foundation).all(Pile::is_empty));
        assert!(board.check_partition().is_ok());
    }

    #[test]
    fn ten_pile_deal() {
        let board = dealt_board(Variant::TenPile, 2);
        assert_eq!(board.card_count(), 104);
        let sizes: Vec<usize> = board.piles_of_kind(PileKind::Tableau).map(Pile::len).collect();
        assert_eq!(sizes, vec![6, 6, 6, 6, 6, 5, 5, 5, 5, 5]);
        assert_eq!(board.stock().map(Pile::len), Some(49));
        assert!(board.check_partition().is_ok());
    }

    #[test]
    fn dealt_tableau_cards_are_stacked_downwards() {
        let board = dealt_board(Variant::Klondike, 3);
        let pile = board.piles_of_kind(PileKind::Tableau).last().expect("場札");
        let ys: Vec<f32> = pile.cards().iter().filter_map(|&e| board.position(e)).map(|p| p.y).collect();
        assert_eq!(ys.len(), 7);
        assert!(ys.windows(2).all(|w| w[0] < w[1]), "下に向かって重なる: {:?}", ys);
        assert_eq!(board.draw_order().last(), pile.top_card().as_ref(), "最後に配ったカードが一番手前");
    }

    #[test]
    fn same_seed_same_deal() {
        let cards_of = |board: &Board| -> Vec<Card> {
            board
                .piles()
                .iter()
                .flat_map(|pile| pile.cards().iter().filter_map(|&e| board.card(e).cloned()))
                .collect()
        };
        let a = dealt_board(Variant::Klondike, 42);
        let b = dealt_board(Variant::Klondike, 42);
        let c = dealt_board(Variant::Klondike, 43);
        assert_eq!(cards_of(&a), cards_of(&b));
        assert_ne!(cards_of(&a), cards_of(&c), "シードが違えば (ほぼ確実に) 違う並び");
    }

    #[test]
    fn redeal_replaces_all_cards() {
        let mut board = dealt_board(Variant::Klondike, 5);
        let mut rng = StdRng::seed_from_u64(6);
        DealInitialCardsSystem::new(Variant::Klondike).execute(&mut board, &mut rng);
        assert_eq!(board.card_count(), 52);
        assert_eq!(board.world().get_all_entities_with_component::<Card>().len(), 52);
        assert!(board.check_partition().is_ok());
    }
}

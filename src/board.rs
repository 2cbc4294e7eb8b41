// src/board.rs
//! 盤面。全部のカード (World のエンティティ) と全部の山を持っているよ。
//!
//! カードを山から山へ動かす操作はここを必ず通る。山の `Vec<Entity>` と
//! カード側の逆参照 (`StackInfo`) を同じ関数の中で書き換えるので、
//! 「どのカードもちょうど 1 つの山に入っている」状態が崩れない。

use std::collections::HashMap;

use log::{debug, warn};

use crate::app::layout_calculator;
use crate::components::{Card, GameStatus, PileId, PileKind, Position, StackInfo, ZIndex};
use crate::config::Variant;
use crate::ecs::{Entity, World};
use crate::error::GameError;
use crate::logic::rules::{check_win_condition, is_move_valid};

/// 山 1 つ分。カードは下から上の順に並ぶ。
#[derive(Debug, Clone, PartialEq)]
pub struct Pile {
    id: PileId,
    kind: PileKind,
    anchor: Position,
    cards: Vec<Entity>,
}

impl Pile {
    pub fn new(id: PileId, kind: PileKind, anchor: Position) -> Self {
        Self { id, kind, anchor, cards: Vec::new() }
    }

    pub fn id(&self) -> PileId {
        self.id
    }

    pub fn kind(&self) -> PileKind {
        self.kind
    }

    /// マットの中心位置。空の山にカードを置くときの基準にもなる。
    pub fn anchor(&self) -> Position {
        self.anchor
    }

    /// 下から上の順のカード。
    pub fn cards(&self) -> &[Entity] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// 一番上のカード。空なら `None`。
    pub fn top_card(&self) -> Option<Entity> {
        self.cards.last().copied()
    }

    /// カードが下から何番目にいるか。
    pub fn index_of(&self, entity: Entity) -> Option<usize> {
        self.cards.iter().position(|&e| e == entity)
    }

    pub(crate) fn push(&mut self, entity: Entity) {
        self.cards.push(entity);
    }

    pub(crate) fn pop_top(&mut self) -> Option<Entity> {
        self.cards.pop()
    }

    fn remove_at(&mut self, index: usize) -> Entity {
        self.cards.remove(index)
    }

    fn clear(&mut self) {
        self.cards.clear();
    }
}

/// 盤面全体。
pub struct Board {
    world: World,
    piles: Vec<Pile>,
    variant: Variant,
    next_z: u32,
    status: GameStatus,
    /// `clear` 以降に作ったカードの枚数。山の総数は常にこれと一致する。
    spawned: usize,
}

impl Board {
    /// バリアントのレイアウトで空の山を並べた盤面を作る。カードはまだ無い。
    pub fn new(variant: Variant) -> Self {
        let piles = layout_calculator::pile_layout(variant)
            .into_iter()
            .enumerate()
            .map(|(i, (kind, anchor))| Pile::new(PileId(i), kind, anchor))
            .collect();
        let mut world = World::new();
        world.register_component::<Card>();
        world.register_component::<Position>();
        world.register_component::<StackInfo>();
        world.register_component::<ZIndex>();
        Self {
            world,
            piles,
            variant,
            next_z: 0,
            status: GameStatus::Playing,
            spawned: 0,
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn piles(&self) -> &[Pile] {
        &self.piles
    }

    pub fn pile(&self, id: PileId) -> Option<&Pile> {
        self.piles.get(id.0)
    }

    /// 指定した種類の山を左から順に。
    pub fn piles_of_kind(&self, kind: PileKind) -> impl Iterator<Item = &Pile> + '_ {
        self.piles.iter().filter(move |p| p.kind == kind)
    }

    /// 山札。どのバリアントでも 1 つだけある。
    pub fn stock(&self) -> Option<&Pile> {
        self.piles_of_kind(PileKind::Stock).next()
    }

    pub fn card(&self, entity: Entity) -> Option<&Card> {
        self.world.get_component::<Card>(entity)
    }

    pub fn position(&self, entity: Entity) -> Option<Position> {
        self.world.get_component::<Position>(entity).copied()
    }

    pub fn set_position(&mut self, entity: Entity, position: Position) {
        match self.world.get_component_mut::<Position>(entity) {
            Some(pos) => *pos = position,
            None => warn!("Board: No Position for {:?}", entity),
        }
    }

    pub fn z_index(&self, entity: Entity) -> Option<ZIndex> {
        self.world.get_component::<ZIndex>(entity).copied()
    }

    /// カードが今いる山。逆参照を引くだけなので山の数に関係なく一発。
    pub fn pile_of(&self, entity: Entity) -> Option<PileId> {
        self.world.get_component::<StackInfo>(entity).map(|info| info.pile)
    }

    /// 全部の山に入っているカードの総数。
    pub fn card_count(&self) -> usize {
        self.piles.iter().map(Pile::len).sum()
    }

    /// 新しいカードエンティティを作って `pile` の一番上に積む。
    ///
    /// 位置は山のマット位置、描画順は一番手前になる。
    pub fn spawn_card(&mut self, card: Card, pile: PileId) -> Option<Entity> {
        let anchor = self.pile(pile)?.anchor;
        let entity = self.world.create_entity();
        self.world.add_component(entity, card);
        self.world.add_component(entity, anchor);
        self.pull_to_top(entity);
        self.push_card(pile, entity);
        self.spawned += 1;
        Some(entity)
    }

    /// どの山にも入っていないカードを `pile` の一番上に積む。
    pub fn push_card(&mut self, pile: PileId, entity: Entity) -> bool {
        if let Some(current) = self.pile_of(entity) {
            warn!("Board: {:?} is already in {}; refusing to push onto {}", entity, current, pile);
            return false;
        }
        let Some(target) = self.piles.get_mut(pile.0) else {
            warn!("Board: Unknown {}", pile);
            return false;
        };
        let position_in_stack = target.len();
        target.push(entity);
        self.world.add_component(entity, StackInfo::new(pile, position_in_stack));
        true
    }

    /// `pile` の一番上のカードを取り出す。取り出したカードはどの山にも属さなくなる。
    pub fn pop_top(&mut self, pile: PileId) -> Option<Entity> {
        let entity = self.piles.get_mut(pile.0)?.pop_top()?;
        self.world.remove_component::<StackInfo>(entity);
        Some(entity)
    }

    /// カードを今の山から外して `target` の一番上に積む。
    ///
    /// 山の途中から抜いた場合は、上にいたカードの `position_in_stack` を詰め直す。
    pub fn move_card_to_pile(&mut self, entity: Entity, target: PileId) -> bool {
        if self.pile(target).is_none() {
            warn!("Board: Unknown target {}", target);
            return false;
        }
        if let Some(source) = self.pile_of(entity) {
            self.detach(entity, source);
        }
        self.push_card(target, entity)
    }

    fn detach(&mut self, entity: Entity, source: PileId) {
        let Some(pile) = self.piles.get_mut(source.0) else {
            return;
        };
        let Some(index) = pile.index_of(entity) else {
            warn!("Board: {:?} claims {} but is not in it", entity, source);
            self.world.remove_component::<StackInfo>(entity);
            return;
        };
        pile.remove_at(index);
        let shifted: Vec<Entity> = pile.cards[index..].to_vec();
        self.world.remove_component::<StackInfo>(entity);
        for (offset, above) in shifted.into_iter().enumerate() {
            if let Some(info) = self.world.get_component_mut::<StackInfo>(above) {
                info.position_in_stack = index + offset;
            }
        }
    }

    /// 持ち上げた束 `selection` (下から上の順) を `pile` に置けるか。
    pub fn can_accept(&self, pile: PileId, selection: &[Entity]) -> bool {
        is_move_valid(self, selection, pile)
    }

    /// `pile` の一番上のカードを表にする。空なら何もしない。
    pub fn flip_top_face_up(&mut self, pile: PileId) {
        let Some(top) = self.pile(pile).and_then(Pile::top_card) else {
            return;
        };
        if let Some(card) = self.world.get_component_mut::<Card>(top) {
            if !card.is_face_up {
                debug!("Board: Revealing {} on top of {}", card.label(), pile);
            }
            card.flip_face_up();
        }
    }

    /// カードを描画順の一番手前に持ってくる。
    pub fn pull_to_top(&mut self, entity: Entity) {
        let z = ZIndex(self.next_z);
        self.next_z += 1;
        self.world.add_component(entity, z);
    }

    /// 描画順 (奥 → 手前) に並べたカード。
    pub fn draw_order(&self) -> Vec<Entity> {
        let mut entities = self.world.get_all_entities_with_component::<ZIndex>();
        entities.sort_by_key(|&e| self.z_index(e));
        entities
    }

    /// 全部のカードを破棄して、山を空っぽにする。レイアウトはそのまま。
    pub fn clear(&mut self) {
        for entity in self.world.get_all_entities_with_component::<Card>() {
            self.world.destroy_entity(entity);
        }
        for pile in &mut self.piles {
            pile.clear();
        }
        self.next_z = 0;
        self.spawned = 0;
        self.status = GameStatus::Playing;
    }

    /// 勝利判定をやり直す。
    pub fn refresh_status(&mut self) -> GameStatus {
        let in_foundations = self
            .piles_of_kind(PileKind::Foundation)
            .map(Pile::len)
            .sum::<usize>();
        let has_foundations = self.piles_of_kind(PileKind::Foundation).next().is_some();
        self.status = if has_foundations && check_win_condition(in_foundations, self.variant.card_count()) {
            GameStatus::Won
        } else {
            GameStatus::Playing
        };
        self.status
    }

    /// 山がカード全体をちょうど分け合っているか調べる。
    ///
    /// - 生きているカードは全部どこかの山に 1 回だけ入っている
    /// - 各カードの `StackInfo` が実際の山と位置に一致している
    /// - 山の総数が作ったカードの枚数と一致している
    pub fn check_partition(&self) -> Result<(), GameError> {
        let mut seen: HashMap<Entity, usize> = HashMap::new();
        for pile in &self.piles {
            for (index, &entity) in pile.cards.iter().enumerate() {
                *seen.entry(entity).or_default() += 1;
                let recorded = self.world.get_component::<StackInfo>(entity);
                if recorded != Some(&StackInfo::new(pile.id, index)) {
                    return Err(GameError::BackReferenceMismatch {
                        entity,
                        actual: pile.id,
                        recorded: recorded.map(|info| info.pile),
                    });
                }
            }
        }
        if let Some((&entity, &count)) = seen.iter().find(|(_, count)| **count > 1) {
            return Err(GameError::CardInManyPiles { entity, count });
        }
        for entity in self.world.get_all_entities_with_component::<Card>() {
            if !seen.contains_key(&entity) {
                return Err(GameError::CardInNoPile { entity });
            }
        }
        let found = self.card_count();
        let expected = self.spawned;
        if found != expected {
            return Err(GameError::CardCountMismatch { expected, found });
        }
        Ok(())
    }
}

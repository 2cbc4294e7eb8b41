//! 組札 (Foundation) へのカード移動ルールを定義するよ。

/// 組札に置けるか。1 枚だけ持っているときだけ OK。
///
/// ランクやスートの並びはチェックしない。組札はとりあえず 1 枚ずつ
/// 受け取る置き場として扱う (A から順に積む本来のルールは入れていない)。
pub fn can_move_to_foundation(selection_len: usize) -> bool {
    selection_len == 1
}

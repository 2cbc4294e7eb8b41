//! 山札 (Stock) に関するルールを定義するよ。

/// 山札から配れるか。
pub fn can_deal_from_stock(stock_is_empty: bool) -> bool {
    !stock_is_empty
}

/// 一列配り (`StockRule::DealRow`) で、この場札に 1 枚配るか。空の場札には配らない。
pub fn receives_row_deal(tableau_is_empty: bool) -> bool {
    !tableau_is_empty
}

use std::cmp::Ordering;

use crate::portfolio::portfolio_model::PositionLot;

/// Shares to take out of one lot during a sale
#[derive(Debug, Clone, PartialEq)]
pub struct LotDraw {
    pub lot_id: String,
    pub shares: i64,
    pub drained: bool,
}

/// Outcome of planning a sale across one or more lots
#[derive(Debug, Clone, PartialEq)]
pub struct LiquidationPlan {
    pub draws: Vec<LotDraw>,
    pub sold_shares: i64,
    pub realized_profit: f64,
}

/// Plans a cheapest-cost-first liquidation of `shares_to_sell` shares at a
/// uniform `sell_price`.
///
/// Pure fold over the lots ordered by ascending cost basis (ties broken by
/// acquisition time). The caller must have verified that aggregate inventory
/// covers the request; any shortfall simply leaves `sold_shares` below the
/// requested amount.
pub fn plan_liquidation(
    lots: &[PositionLot],
    shares_to_sell: i64,
    sell_price: f64,
) -> LiquidationPlan {
    let mut ordered: Vec<&PositionLot> = lots.iter().collect();
    ordered.sort_by(|a, b| {
        a.average_cost
            .partial_cmp(&b.average_cost)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.created_at.cmp(&b.created_at))
    });

    ordered.into_iter().fold(
        LiquidationPlan {
            draws: Vec::new(),
            sold_shares: 0,
            realized_profit: 0.0,
        },
        |mut plan, lot| {
            let remaining = shares_to_sell - plan.sold_shares;
            if remaining <= 0 {
                return plan;
            }

            let take = remaining.min(lot.shares);
            plan.realized_profit += (sell_price - lot.average_cost) * take as f64;
            plan.sold_shares += take;
            plan.draws.push(LotDraw {
                lot_id: lot.id.clone(),
                shares: take,
                drained: take == lot.shares,
            });
            plan
        },
    )
}

pub(crate) mod liquidation;
pub(crate) mod portfolio_errors;
pub(crate) mod portfolio_model;
pub(crate) mod portfolio_repository;
pub(crate) mod portfolio_service;
pub(crate) mod portfolio_traits;

pub use liquidation::{plan_liquidation, LiquidationPlan, LotDraw};
pub use portfolio_errors::{PortfolioError, Result};
pub use portfolio_model::{
    LotValuation, NewPositionLot, PositionLot, PositionLotDB, SaleOutcome,
};
pub use portfolio_repository::PortfolioRepository;
pub use portfolio_service::PortfolioService;
pub use portfolio_traits::{PortfolioRepositoryTrait, PortfolioServiceTrait};

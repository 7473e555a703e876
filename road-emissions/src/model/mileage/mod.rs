mod historical_car_data;
mod road_mileage_ops;
mod road_mileage_row;

pub use historical_car_data::{pivot_historical, HistoricalCarData};
pub use road_mileage_ops::forecast_road_mileage;
pub use road_mileage_row::RoadMileageRow;

use road_emissions_core::model::YearSeries;

/// car mileage per road type from the first historical year through the target year
pub type RoadMileageTable = YearSeries<RoadMileageRow>;

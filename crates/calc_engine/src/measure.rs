//! The closed catalogue of calculable measures.

use std::fmt;
use std::str::FromStr;

/// A measure a column can request for every trade in a run.
///
/// The enum is closed and totally ordered, so column layouts sort
/// deterministically and a match over measures is exhaustively checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Measure {
    /// The trade identifier.
    Id,
    /// The counterparty identifier.
    Counterparty,
    /// The trade date.
    TradeDate,
    /// The settlement date.
    SettlementDate,
    /// The maturity date of the product.
    MaturityDate,
    /// The headline notional of the product.
    Notional,
    /// The present value of the product.
    PresentValue,
    /// The present value of the pay leg of a swap.
    PresentValuePayLeg,
    /// The present value of the receive leg of a swap.
    PresentValueReceiveLeg,
    /// Interest accrued in the current period of a swap.
    AccruedInterest,
}

impl Measure {
    /// All measures in their canonical order.
    pub const ALL: [Measure; 10] = [
        Measure::Id,
        Measure::Counterparty,
        Measure::TradeDate,
        Measure::SettlementDate,
        Measure::MaturityDate,
        Measure::Notional,
        Measure::PresentValue,
        Measure::PresentValuePayLeg,
        Measure::PresentValueReceiveLeg,
        Measure::AccruedInterest,
    ];

    /// Returns the stable name of the measure.
    pub fn name(&self) -> &'static str {
        match self {
            Measure::Id => "Id",
            Measure::Counterparty => "Counterparty",
            Measure::TradeDate => "TradeDate",
            Measure::SettlementDate => "SettlementDate",
            Measure::MaturityDate => "MaturityDate",
            Measure::Notional => "Notional",
            Measure::PresentValue => "PresentValue",
            Measure::PresentValuePayLeg => "PresentValuePayLeg",
            Measure::PresentValueReceiveLeg => "PresentValueReceiveLeg",
            Measure::AccruedInterest => "AccruedInterest",
        }
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Measure {
    type Err = UnknownMeasure;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Measure::ALL
            .into_iter()
            .find(|m| m.name() == s)
            .ok_or_else(|| UnknownMeasure {
                name: s.to_string(),
            })
    }
}

/// Error parsing a measure name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown measure '{name}'")]
pub struct UnknownMeasure {
    /// The name that failed to parse.
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_is_total_and_stable() {
        let mut shuffled = vec![
            Measure::PresentValue,
            Measure::Id,
            Measure::Notional,
            Measure::Counterparty,
        ];
        shuffled.sort();
        assert_eq!(
            shuffled,
            vec![
                Measure::Id,
                Measure::Counterparty,
                Measure::Notional,
                Measure::PresentValue,
            ]
        );
    }

    #[test]
    fn test_round_trip_names() {
        for measure in Measure::ALL {
            assert_eq!(measure.name().parse::<Measure>().unwrap(), measure);
        }
        assert!("Gamma".parse::<Measure>().is_err());
    }
}

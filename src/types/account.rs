//! Account types.

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Balance of one currency account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    /// Amount as a decimal string
    pub amount: String,
}

impl Balance {
    /// Parse the amount into a float
    ///
    /// # Errors
    ///
    /// Returns [`Error::ParseAmount`] if the amount is not a decimal number.
    pub fn amount_f64(&self) -> Result<f64, Error> {
        self.amount
            .parse::<f64>()
            .map_err(|source| Error::ParseAmount {
                amount: self.amount.clone(),
                source,
            })
    }
}

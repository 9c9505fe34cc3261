// used for decimal numbers
use bigdecimal::{BigDecimal, Zero};

use std::fmt;
use std::ops;
use std::str::FromStr;

use crate::capability::{Parsable, Renderable, SqlField};

/// An arbitrary precision `DECIMAL` column. Zero doubles as the "no filter" value.
#[derive(Eq, PartialEq, Hash, PartialOrd, Ord, Clone, Debug, Default)]
pub struct SqlDecimal(BigDecimal);

impl SqlDecimal {
    pub fn new(value: BigDecimal) -> Self {
        Self(value)
    }
}
impl FromStr for SqlDecimal {
    type Err = bigdecimal::ParseBigDecimalError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BigDecimal::from_str(s).map(Self)
    }
}
impl fmt::Display for SqlDecimal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl ops::Deref for SqlDecimal {
    type Target = BigDecimal;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Renderable for SqlDecimal {
    fn render(&self) -> String {
        self.0.to_string()
    }
}
impl Parsable for SqlDecimal {
    fn parse_sql(&mut self, text: &str) -> bool {
        match BigDecimal::from_str(text.trim()) {
            Ok(value) => {
                self.0 = value;
                true
            }
            Err(_) => {
                self.0 = BigDecimal::zero();
                false
            }
        }
    }
}
impl SqlField for SqlDecimal {
    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
    fn renderable(&self) -> Option<&dyn Renderable> {
        Some(self)
    }
    fn parsable(&mut self) -> Option<&mut dyn Parsable> {
        Some(self)
    }
}

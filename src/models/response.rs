
extern crate serde;

use serde::{Serialize, Deserialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Count {
    pub count: i64
}

impl Count {
    pub fn new(count: i64) -> Self {
        Count {
            count
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String
}

impl ErrorBody {
    pub fn new(error: impl ToString) -> Self {
        ErrorBody {
            error: error.to_string()
        }
    }
}

use serde::{Deserialize, Serialize};
use super::principal::Principal;

#[derive(Clone, Debug, Default, Eq, Ord, PartialEq, PartialOrd, Deserialize, Serialize)]
pub enum Agent {
    #[default]
    Anonymous,
    Principal(Principal),
}

mod impls;

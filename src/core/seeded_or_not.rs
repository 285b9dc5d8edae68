use serde::{Serialize, Deserialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeededOrNot {
    Seeded(u64),
    #[default]
    Unseeded,
}

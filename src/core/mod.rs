// Domain-layer modules and shared errors/models
pub mod scorer {
    pub use crate::scorer::*;
}

pub mod season {
    pub use crate::season::*;
}

pub mod dataset {
    pub use crate::dataset::*;
}

pub mod models {
    pub use crate::models::*;
}

pub mod errors {
    pub use crate::errors::*;
}

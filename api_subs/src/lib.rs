use actix_web::web::{self};

pub mod services {
    pub mod lifecycle;
    pub mod sub;
}

pub mod dtos {
    pub mod sub;
}

pub mod models {
    pub mod sub;
}

/// Subscription routes are mounted but expose no handlers yet.
pub fn mount_subs() -> actix_web::Scope {
    web::scope("/subscriptions")
}

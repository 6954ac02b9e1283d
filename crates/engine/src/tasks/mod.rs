//! Behaviour routines driven by the scheduler.

mod debris;
mod director;
mod explosion;
mod projectile;
mod ship;
mod star;
mod year;

pub use debris::Debris;
pub use director::SpawnDirector;
pub use explosion::Explosion;
pub use projectile::Projectile;
pub use ship::{ShipAnimator, ShipControl};
pub use star::{scatter_stars, Star};
pub use year::YearClock;

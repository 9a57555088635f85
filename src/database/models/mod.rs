pub mod director;
pub mod movie;

pub use director::{Director, DirectorCreate, DirectorUpdate};
pub use movie::{Movie, MoviePayload};

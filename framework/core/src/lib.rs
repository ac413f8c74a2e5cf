mod bail;

pub mod prelude {
    pub use crate::bail::GraphBailError;
}

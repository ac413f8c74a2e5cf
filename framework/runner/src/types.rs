/// Recommended error type for driver code and the `main` functions of the harness binaries.
/// This type is compatible with the library errors in this workspace so you can use `?` to
/// propagate them.
pub type DynoResult<T> = anyhow::Result<T>;

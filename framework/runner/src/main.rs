use dyno_runner::prelude::{init, run, DynoResult};

fn main() -> DynoResult<()> {
    let cli = init();
    run(cli)
}

use anyhow::Result;
use std::io;

use fixture_kit::run;

fn main() -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    run(&mut out)?;

    Ok(())
}

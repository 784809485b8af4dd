use cadenza::{Composer, Preset};
use std::fs;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let preset = Preset::find("CLEAR TEMP FILES").expect("built-in preset");
    let entry = Composer::with_preset(&preset).entry();

    fs::write("cronjob.sh", entry.to_script())?;
    println!("Wrote cronjob.sh:");
    print!("{}", entry.to_script());
    Ok(())
}

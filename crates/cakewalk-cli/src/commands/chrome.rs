use anyhow::Result;
use cakewalk_browser::ChromeFinder;
use console::style;
use std::path::PathBuf;
use std::process::Command;

pub fn execute(chrome_path: Option<PathBuf>) -> Result<()> {
    let finder = ChromeFinder::new(chrome_path);
    let chrome_binary = finder.find()?;

    println!(
        "✅ Found Chrome at: {}",
        style(chrome_binary.display()).green()
    );

    match Command::new(&chrome_binary).arg("--version").output() {
        Ok(output) if output.status.success() => {
            println!("   {}", String::from_utf8_lossy(&output.stdout).trim());
        }
        _ => println!("   {}", style("Version unavailable").dim()),
    }

    Ok(())
}

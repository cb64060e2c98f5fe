//! Workspace check runner
//!
//! Runs the formatter, lints, and the test suite in order, stopping at the
//! first failure so broken formatting never hides a failing test.

use std::process::Command;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;

/// Run formatting, lints, and the test suite
#[derive(Parser, Debug)]
pub struct Check {
    /// Verify formatting instead of rewriting files
    #[arg(long)]
    pub no_fix: bool,
}

impl Check {
    pub fn execute(self) -> Result<()> {
        let fmt: &[&str] = if self.no_fix {
            &["fmt", "--all", "--check"]
        } else {
            &["fmt", "--all"]
        };
        let steps: [(&str, &[&str]); 3] = [
            ("cargo fmt", fmt),
            (
                "cargo clippy",
                &["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"],
            ),
            ("cargo test", &["test", "--workspace"]),
        ];

        for (name, args) in steps {
            println!("Running {name}...");
            let status = Command::new("cargo")
                .args(args)
                .status()
                .with_context(|| format!("failed to launch {name}"))?;
            if !status.success() {
                println!();
                println!("{} {}", style("✗").red().bold(), style(name).bold());
                anyhow::bail!("{name} exited with {status}");
            }
            println!();
        }

        println!(
            "{}",
            style("All checks completed successfully!").green().bold()
        );
        Ok(())
    }
}

use clap::Parser;
use sortbench::Algorithm;

/// List the available sorting algorithms
#[derive(Parser)]
pub struct ListArgs {}

impl ListArgs {
    pub fn run(&self) -> anyhow::Result<()> {
        let width = Algorithm::ALL
            .iter()
            .map(|a| a.name().len())
            .max()
            .unwrap_or_default();
        for algorithm in Algorithm::ALL {
            println!(
                "{}: {:width$}  {:10}  {:8}  ({})",
                algorithm.menu_number(),
                algorithm.name(),
                algorithm.complexity(),
                if algorithm.is_stable() { "stable" } else { "unstable" },
                algorithm.key(),
                width = width
            );
        }
        Ok(())
    }
}

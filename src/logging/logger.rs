use colored::Colorize;

use crate::{
    Sample,
    Learner,
    Classifier,
    DecisionTreeClassifier,
};
use crate::constants::PRINT_WIDTH as WIDTH;
use crate::error::Result;

use std::fs::File;
use std::io::prelude::*;
use std::path::Path;
use std::time::Instant;

const PREC_WIDTH: usize = 5;
const FULL_WIDTH: usize = 60;
const STAT_WIDTH: usize = (FULL_WIDTH - 4) / 2;
const HEADER: &str = "Nodes,Leaves,Depth,TrainError,TestError,Time\n";


/// Struct `Logger` trains a tree learner and
/// logs the size of the tree, train/test error, and running time.
///
/// The result is printed to the console and written to a CSV file
/// with the header `Nodes,Leaves,Depth,TrainError,TestError,Time`.
/// `Time` is measured in milliseconds.
pub struct Logger<'a, L> {
    pub(super) learner: L,
    pub(super) train: &'a Sample,
    pub(super) test: &'a Sample,
    pub(super) verbose: bool,
}


impl<'a, L> Logger<'a, L> {
    /// Create a new instance of `Logger`.
    pub fn new(learner: L, train: &'a Sample, test: &'a Sample) -> Self {
        Self { learner, train, test, verbose: true, }
    }
}


impl<L> Logger<'_, L>
    where L: Learner<Hypothesis = DecisionTreeClassifier>,
{
    /// Set whether `run` prints to the console.
    /// The CSV file is written either way.
    #[inline(always)]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }


    #[inline(always)]
    fn print_log_header(&self) {
        println!(
            "      {:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\n",
            "NODES".bold().red(),
            "LEAVES".bold().red(),
            "DEPTH".bold().blue(),
            "TRAIN".bold().green(),
            "TEST".bold().yellow(),
            "TIME".bold().cyan(),
        );
    }


    /// print current settings.
    #[inline(always)]
    fn print_stats(&self) {
        let header = format!(
            "{:=>FULL_WIDTH$}\n{:^FULL_WIDTH$}\n{:->FULL_WIDTH$}",
            "", "STATS".bold(), "",
        );
        println!(
            "\n{header}\n\
            + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}",
            "Learner".bold(),
            self.learner.name().bold().green(),
        );

        if let Some(info) = self.learner.info() {
            let line = info.into_iter()
                .map(|(key, val)| {
                    format!(
                        "    + {:<STAT_WIDTH$}\t{:>width$}",
                        key,
                        val.bold().yellow(),
                        width = STAT_WIDTH - 8
                    )
                })
                .collect::<Vec<_>>()
                .join("\n");
            println!("{line}");
        }

        println!(
            "\
            + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}\n\
            + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}\n\
            {:=^FULL_WIDTH$}\n\
            ",
            "# of train examples".bold(),
            self.train.shape().0.to_string().bold().green(),
            "# of test examples".bold(),
            self.test.shape().0.to_string().bold().green(),
            "".bold(),
        );
    }


    /// Run the given learner with logging.
    /// Note that this method is almost the same as `Learner::produce`.
    /// This method measures the running time of the training.
    pub fn run<P: AsRef<Path>>(&self, filename: P)
        -> Result<DecisionTreeClassifier>
    {
        // Open file
        let mut file = File::create(filename)?;

        // Write header to the file
        file.write_all(HEADER.as_bytes())?;

        if self.verbose {
            self.print_stats();
            self.print_log_header();
        }

        // Start measuring time
        let now = Instant::now();

        let f = self.learner.produce(self.train)?;

        // Stop measuring and convert `Duration` to Milliseconds.
        let time = now.elapsed().as_millis();

        let train = f.error_rate(self.train)?;
        let test = f.error_rate(self.test)?;
        let (nodes, leaves, depth) = (f.n_nodes(), f.n_leaves(), f.depth());

        // Write the results to `file`.
        let line = format!("{nodes},{leaves},{depth},{train},{test},{time}\n");
        file.write_all(line.as_bytes())?;

        if self.verbose {
            println!(
                "{} {}\t{}\t{}\t{}\t{}\t{}\n",
                "[FIN]".bold().bright_green(),
                format!("{:>WIDTH$}", nodes).red(),
                format!("{:>WIDTH$}", leaves).red(),
                format!("{:>WIDTH$}", depth).blue(),
                format!("{:>WIDTH$.PREC_WIDTH$}", train).bold().green(),
                format!("{:>WIDTH$.PREC_WIDTH$}", test).bold().yellow(),
                time_format(time).bold().cyan(),
            );
        }
        Ok(f)
    }
}


fn time_format(millisec: u128) -> String {
    if millisec < 1_000 {
        return format!("  0.{:0>3}s", millisec);
    }
    let sec = millisec / 1_000;
    let millisec = millisec % 1_000;
    if sec < 60 {
        return format!(" {:0>2}.{:0>3}s", sec, millisec);
    }
    let min = sec / 60;
    let sec = sec % 60;
    if min < 60 {
        return format!(" {:0>2}m {:0>2}s", min, sec);
    }
    let hours = min / 60;
    let min = min % 60;
    format!(" {:0>2}h {:0>2}m", hours, min)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_format_01() {
        assert_eq!(time_format(42), "  0.042s");
        assert_eq!(time_format(61_500), " 01m 01s");
        assert_eq!(time_format(3_600_000), " 01h 00m");
    }
}

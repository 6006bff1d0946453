use std::{
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader, Lines},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;

#[derive(Debug)]
enum Error {
    InvalidCalorieCount(String, usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidCalorieCount(s, line_n) => write!(
                f,
                "Invalid calorie count({}) in line {}, expect a decimal integer.",
                s, line_n
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
    /// Count the last inventory even if the input doesn't end with a blank line.
    #[arg(long)]
    pub flush_trailing: bool,
}

/// Iterator over the total calories of each elf's inventory, one inventory
/// per blank-line-separated group of counts in the input.
#[derive(Debug)]
pub struct CalorieTotals<R> {
    lines: Lines<R>,
    running_sum: i64,
    in_inventory: bool,
    line_n: usize,
    flush_trailing: bool,
    finished: bool,
}

impl<R: BufRead> CalorieTotals<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            running_sum: 0,
            in_inventory: false,
            line_n: 0,
            flush_trailing: false,
            finished: false,
        }
    }

    pub fn flush_trailing(mut self, flush: bool) -> Self {
        self.flush_trailing = flush;
        self
    }
}

impl<R: BufRead> Iterator for CalorieTotals<R> {
    type Item = Result<i64>;

    fn next(&mut self) -> Option<Result<i64>> {
        if self.finished {
            return None;
        }

        loop {
            self.line_n += 1;
            match self.lines.next() {
                Some(Ok(line)) => {
                    if line.is_empty() {
                        let total = self.running_sum;
                        self.running_sum = 0;
                        self.in_inventory = false;
                        return Some(Ok(total));
                    }

                    match line.parse::<i64>() {
                        Ok(count) => {
                            self.running_sum += count;
                            self.in_inventory = true;
                        }
                        Err(_) => {
                            self.finished = true;
                            return Some(Err(Error::InvalidCalorieCount(line, self.line_n).into()));
                        }
                    }
                }
                Some(Err(e)) => {
                    self.finished = true;
                    return Some(
                        Err(e).with_context(|| format!("Failed to read line {}.", self.line_n)),
                    );
                }
                None => {
                    self.finished = true;
                    if self.flush_trailing && self.in_inventory {
                        return Some(Ok(self.running_sum));
                    }

                    return None;
                }
            }
        }
    }
}

pub fn read_calorie_totals<P: AsRef<Path>>(path: P) -> Result<CalorieTotals<BufReader<File>>> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;

    Ok(CalorieTotals::new(BufReader::new(file)))
}

pub fn max_total(totals: impl Iterator<Item = Result<i64>>) -> Result<i64> {
    let mut max = 0;
    for total in totals {
        let total = total?;
        if total > max {
            max = total;
        }
    }

    Ok(max)
}

/// Holder of the k largest totals seen so far. Slots start at 0, so a total
/// has to beat the smallest held value to get in.
#[derive(Debug)]
pub struct TopTotals {
    slots: Vec<i64>,
}

impl TopTotals {
    pub fn new(k: usize) -> Self {
        Self { slots: vec![0; k] }
    }

    pub fn offer(&mut self, total: i64) {
        let Some(min_ind) = min_value_index(&self.slots) else {
            return;
        };
        if total > self.slots[min_ind] {
            self.slots[min_ind] = total;
        }
    }

    pub fn sum(&self) -> i64 {
        self.slots.iter().sum()
    }
}

pub fn top_total_sum(totals: impl Iterator<Item = Result<i64>>, k: usize) -> Result<i64> {
    let mut top = TopTotals::new(k);
    for total in totals {
        top.offer(total?);
    }

    Ok(top.sum())
}

// First occurrence wins on ties.
fn min_value_index(values: &[i64]) -> Option<usize> {
    if values.is_empty() {
        return None;
    }

    let mut min_ind = 0;
    for ind in 1..values.len() {
        if values[ind] < values[min_ind] {
            min_ind = ind;
        }
    }

    Some(min_ind)
}

// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Fixed-width console report, one row per observation.

use std::fmt::Display;

#[derive(Debug, Clone, Default)]
pub struct Report {
    rows: usize,
    current: &'static str,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn print_header(&self) {
        println!(
            "{:<5} | {:<13} | {:<44} | {:<24}",
            "Row", "Scenario", "Expression", "Value"
        );
        println!("{}", "-".repeat(96));
    }

    /// Starts a new scenario; later rows are attributed to it.
    pub fn scenario(&mut self, name: &'static str) {
        self.current = name;
    }

    pub fn log<V: Display>(&mut self, expression: &str, value: V) {
        self.rows += 1;
        println!(
            "{:<5} | {:<13} | {:<44} | {:<24}",
            self.rows, self.current, expression, value
        );
    }

    pub fn rows(&self) -> usize {
        self.rows
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Report(rows: {})", self.rows)
    }
}

#[cfg(test)]
mod tests {
    use super::Report;

    #[test]
    fn test_rows_are_counted() {
        let mut report = Report::new();
        report.scenario("unit");
        report.log("1 < 2", true);
        report.log("x", 'x');
        assert_eq!(report.rows(), 2);
        assert_eq!(format!("{}", report), "Report(rows: 2)");
    }
}

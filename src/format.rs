//! Fixed-width text rendering.
//!
//! The lookup table prints one 3×3 block per (skill, distance) cell: the nine
//! faces in reading order, skill labelled on the middle line.

use std::fmt::Write;

use crate::constants::HISTOGRAM_DISPLAY_MIN_SHARE;
use crate::simulation::{CostSummary, Histogram, QuantileTable};
use crate::table::{CellResult, LookupTable};

const ROW_LABEL_WIDTH: usize = 6;
const COLUMN_GAP: &str = "   ";

fn block_row(d9: Option<&QuantileTable>, row: usize) -> String {
    match d9.and_then(|t| t.row(row)) {
        Some([a, b, c]) => format!("{:2} {:2} {:2}", a, b, c),
        None => "-- -- --".to_string(),
    }
}

/// Render the whole table: title, distance header, one block row per skill.
pub fn render_table(table: &LookupTable) -> String {
    let mut out = String::new();
    let block_width = 8 + COLUMN_GAP.len();
    let header_width = block_width * table.distances().len();

    let _ = writeln!(
        out,
        "{:<w$}{:^h$}",
        " Skill",
        "Distance",
        w = ROW_LABEL_WIDTH,
        h = header_width
    );
    let mut header = " ".repeat(ROW_LABEL_WIDTH);
    for &d in table.distances() {
        let _ = write!(header, "{:^8}{}", d, COLUMN_GAP);
    }
    let _ = writeln!(out, "{}", header.trim_end());

    for &skill in table.skills() {
        let mut lines = [
            " ".repeat(ROW_LABEL_WIDTH),
            format!(" {:3}  ", skill),
            " ".repeat(ROW_LABEL_WIDTH),
        ];
        for &d in table.distances() {
            let d9 = table.get(skill, d);
            for (row, line) in lines.iter_mut().enumerate() {
                line.push_str(&block_row(d9, row));
                line.push_str(COLUMN_GAP);
            }
        }
        for line in &lines {
            let _ = writeln!(out, "{}", line.trim_end());
        }
        out.push('\n');
    }
    out
}

/// One line per bucket holding at least 2% of trials: cost, count,
/// absolute and running percentage, and a bar of one `*` per ten points.
pub fn render_histogram(histo: &Histogram) -> String {
    let mut out = String::new();
    let min_count = histo.total() as f64 * HISTOGRAM_DISPLAY_MIN_SHARE;
    for (cost, sample) in histo.iter() {
        if (sample.count as f64) < min_count {
            continue;
        }
        let bar = "*".repeat(((sample.absolute_percentage + 5) / 10) as usize);
        let _ = writeln!(
            out,
            "{:2} {:5} ({:2}% / {:2}%) {}",
            cost, sample.count, sample.absolute_percentage, sample.running_percentage, bar
        );
    }
    out
}

pub fn render_summary(summary: &CostSummary) -> String {
    format!(
        "mean {:.2}  std {:.2}  min {}  median {}  max {}",
        summary.mean, summary.std_dev, summary.min, summary.median, summary.max
    )
}

/// Histogram, summary, and D9 block for a single cell.
pub fn render_cell(cell: &CellResult) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Skill {}, distance {} ({} trials)",
        cell.skill,
        cell.distance,
        cell.histogram.total()
    );
    out.push_str(&render_histogram(&cell.histogram));
    let _ = writeln!(out, "{}", render_summary(&cell.summary));
    for row in 0..3 {
        let _ = writeln!(out, "  {}", block_row(Some(&cell.d9), row));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DistanceRange, SkillRange, TableConfig};
    use crate::simulation::build_histogram;
    use crate::table::assemble;

    #[test]
    fn test_block_row() {
        let d9 = QuantileTable([2, 2, 3, 4, 5, 6, 7, 8, 12]);
        assert_eq!(block_row(Some(&d9), 0), " 2  2  3");
        assert_eq!(block_row(Some(&d9), 2), " 7  8 12");
        assert_eq!(block_row(None, 1), "-- -- --");
    }

    #[test]
    fn test_render_table_layout() {
        let cfg = TableConfig {
            sample_count: 100,
            seed: 1,
            skill_range: SkillRange {
                min: 100,
                max: 110,
                step: 10,
            },
            distance_range: DistanceRange { min: 2, max: 4 },
        };
        let table = assemble(&cfg).unwrap();
        let text = render_table(&table);
        let lines: Vec<&str> = text.lines().collect();

        assert!(lines[0].starts_with(" Skill"));
        assert!(lines[0].contains("Distance"));
        assert!(lines[1].contains('2') && lines[1].contains('3'));
        // Skill 100 block: certain success, every face equals the distance.
        assert_eq!(lines[2], "       2  2  2    3  3  3");
        assert_eq!(lines[3], " 100   2  2  2    3  3  3");
        assert_eq!(lines[4], "       2  2  2    3  3  3");
        assert_eq!(lines[5], "");
        assert_eq!(lines[7], " 110   2  2  2    3  3  3");
    }

    #[test]
    fn test_render_histogram_skips_rare_buckets() {
        let mut outcomes = vec![3u32; 60];
        outcomes.extend(vec![4u32; 39]);
        outcomes.push(20);
        let text = render_histogram(&build_histogram(&outcomes));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], " 3    60 (60% / 60%) ******");
        assert_eq!(lines[1], " 4    39 (39% / 99%) ****");
    }
}

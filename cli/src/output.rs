use ron::ser::{to_string_pretty, PrettyConfig};
use transforms::EcefSolution;

use crate::args::{CliErrors, OutputFormat};

/// Renders the whole solution up front so a failure never leaves partial output.
pub fn render(solution: &EcefSolution, format: OutputFormat) -> Result<String, CliErrors> {
    match format {
        OutputFormat::Lines => {
            let r = solution.r_ecef;
            // Debug keeps the trailing ".0" on whole numbers
            Ok(format!("{:?}\n{:?}\n{:?}\n", r.x, r.y, r.z))
        }
        OutputFormat::Ron => {
            let mut s = to_string_pretty(solution, PrettyConfig::new())?;
            s.push('\n');
            Ok(s)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use nalgebra::Vector3;
    use time::CalendarTimestamp;
    use transforms::CoordinateTransformer;

    fn j2000_solution() -> EcefSolution {
        let epoch = CalendarTimestamp::new(2000.0, 1.0, 1.0, 12.0, 0.0, 0.0);
        CoordinateTransformer::default().eci_to_ecef(&epoch, Vector3::new(6678.0, 0.0, 0.0))
    }

    #[test]
    fn test_render_lines() {
        let rendered = render(&j2000_solution(), OutputFormat::Lines).unwrap();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_abs_diff_eq!(lines[0].parse::<f64>().unwrap(), 1300.3508946766183, epsilon = 1e-9);
        assert_abs_diff_eq!(lines[1].parse::<f64>().unwrap(), 6550.1733985226465, epsilon = 1e-9);
        assert_eq!(lines[2], "0.0");
        assert!(rendered.ends_with('\n'));
    }

    #[test]
    fn test_render_whole_numbers_keep_decimal_point() {
        let mut solution = j2000_solution();
        solution.r_ecef = Vector3::new(6678.0, -42.0, 0.0);
        let rendered = render(&solution, OutputFormat::Lines).unwrap();
        assert_eq!(rendered, "6678.0\n-42.0\n0.0\n");
    }

    #[test]
    fn test_render_ron() {
        let rendered = render(&j2000_solution(), OutputFormat::Ron).unwrap();

        assert!(rendered.contains("r_ecef"));
        assert!(rendered.contains("gmst"));
        assert!(rendered.contains("67310.54841"));
        assert!(rendered.contains("Standard"));

        let parsed: EcefSolution = ron::from_str(&rendered).unwrap();
        assert_eq!(parsed.model, transforms::EarthRotationModel::Standard);
        assert_abs_diff_eq!(parsed.r_ecef.x, 1300.3508946766183, epsilon = 1e-9);
    }
}

use quad_aspect::{compute_aspect_ratio, AspectRatio, Pt2, RectifyError};

fn main() {
    env_logger::init();

    // Image 1920x1080, principal point at the centre.
    let principal_point = Pt2::new(1920.0 / 2.0, 1080.0 / 2.0);

    // Trapezoid: top edge shorter and farther away.
    let trapezoid = [
        Pt2::new(100.0, 100.0),
        Pt2::new(400.0, 120.0),
        Pt2::new(450.0, 400.0),
        Pt2::new(80.0, 380.0),
    ];
    print!(
        "{}",
        render(
            "Calculated Aspect Ratio (Width / Height)",
            "Could not calculate aspect ratio",
            &compute_aspect_ratio(&trapezoid, principal_point),
        )
    );

    let distorted = [
        Pt2::new(751.0, 220.0),
        Pt2::new(1833.0, 502.0),
        Pt2::new(1198.0, 888.0),
        Pt2::new(63.0, 409.0),
    ];
    print!(
        "{}",
        render(
            "Distorted Example Aspect Ratio (Width / Height)",
            "Could not calculate aspect ratio for the distorted example",
            &compute_aspect_ratio(&distorted, principal_point),
        )
    );
}

/// Value line followed by one line per warning, or the failure line.
fn render(label: &str, failure: &str, outcome: &Result<AspectRatio, RectifyError>) -> String {
    match outcome {
        Ok(ratio) => {
            let mut out = format!("{label}: {:.4}\n", ratio.value());
            for w in ratio.warnings() {
                out.push_str(&format!("  Warning: {w}\n"));
            }
            out
        }
        Err(err) => format!("{failure}: {err}\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flagged_ratio_prints_its_warnings() {
        let square = [
            Pt2::new(0.0, 0.0),
            Pt2::new(10.0, 0.0),
            Pt2::new(10.0, 10.0),
            Pt2::new(0.0, 10.0),
        ];
        let text = render("Ratio", "Failed", &compute_aspect_ratio(&square, Pt2::origin()));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3, "{text}");
        assert_eq!(lines[0], "Ratio: 1.0000");
        assert!(lines[1].starts_with("  Warning: width"), "{text}");
        assert!(lines[2].starts_with("  Warning: height"), "{text}");
    }

    #[test]
    fn reliable_ratio_prints_one_line() {
        let trapezoid = [
            Pt2::new(100.0, 100.0),
            Pt2::new(400.0, 120.0),
            Pt2::new(450.0, 400.0),
            Pt2::new(80.0, 380.0),
        ];
        let text = render("Ratio", "Failed", &compute_aspect_ratio(&trapezoid, Pt2::origin()));
        assert_eq!(text, "Ratio: 1.4555\n");
    }

    #[test]
    fn failure_prints_the_error() {
        let text = render("Ratio", "Failed", &compute_aspect_ratio(&[], Pt2::origin()));
        assert_eq!(text, "Failed: expected exactly 4 corners, got 0\n");
    }
}

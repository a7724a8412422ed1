// File: crates/qae-chart/src/axis.rs
// Summary: Axis model with labels, ranges, optional fixed limits and categorical ticks.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScaleKind {
    #[default]
    Linear,
    Log10,
}

impl std::str::FromStr for ScaleKind {
    type Err = crate::ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" => Ok(ScaleKind::Linear),
            "log" | "log10" => Ok(ScaleKind::Log10),
            other => Err(crate::ChartError::InvalidStyle { kind: "axis scale", value: other.to_string() }),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub kind: ScaleKind,
    /// User supplied limits; autoscaling leaves a limited axis untouched.
    pub limits: Option<(f64, f64)>,
    /// Categorical tick labels at explicit positions (bar charts).
    pub tick_labels: Option<Vec<(f64, String)>>,
    /// Tick label rotation in degrees, counter-clockwise.
    pub tick_rotation: f32,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self {
            label: label.into(),
            min,
            max,
            kind: ScaleKind::Linear,
            limits: None,
            tick_labels: None,
            tick_rotation: 0.0,
        }
    }

    pub fn default_x() -> Self {
        Self::new("", 0.0, 1.0)
    }

    pub fn default_y() -> Self {
        Self::new("", 0.0, 1.0)
    }

    /// Fix the visible range, like `plt.xlim`/`plt.ylim`.
    pub fn set_limits(&mut self, min: f64, max: f64) {
        self.limits = Some((min, max));
        self.min = min;
        self.max = max;
    }

    pub fn with_kind(mut self, kind: ScaleKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn set_categories<S: Into<String>>(&mut self, labels: impl IntoIterator<Item = S>) {
        self.tick_labels = Some(
            labels.into_iter().enumerate().map(|(i, l)| (i as f64, l.into())).collect(),
        );
    }
}

use serde::Serialize;

use crate::complexity::SAMPLE_COUNT;

/// One chart sample. `operations == None` is a gap in the line, not zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SamplePoint {
    pub n: u32,
    pub operations: Option<f64>,
}

/// Exactly [`SAMPLE_COUNT`] points, `n = 1..=10` ascending.
///
/// Visible values always form a prefix: once a point is absent, every later
/// point is absent too.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct GrowthSeries {
    points: Vec<SamplePoint>,
}

impl GrowthSeries {
    /// Build a series from its visible prefix. Values past `SAMPLE_COUNT`
    /// are dropped; the remainder is padded with gaps.
    pub(crate) fn from_visible(values: Vec<f64>) -> Self {
        let mut visible = values.into_iter();
        let points = (1..=SAMPLE_COUNT)
            .map(|n| SamplePoint {
                n,
                operations: visible.next(),
            })
            .collect();
        Self { points }
    }

    pub fn points(&self) -> &[SamplePoint] {
        &self.points
    }

    pub fn get(&self, n: u32) -> Option<&SamplePoint> {
        n.checked_sub(1).and_then(|i| self.points.get(i as usize))
    }

    /// Value at `n`, or `None` when out of range or elided.
    pub fn value_at(&self, n: u32) -> Option<f64> {
        self.get(n).and_then(|p| p.operations)
    }

    pub fn visible_len(&self) -> usize {
        self.points.iter().take_while(|p| p.operations.is_some()).count()
    }

    pub fn visible_values(&self) -> Vec<f64> {
        self.points.iter().map_while(|p| p.operations).collect()
    }

    /// `(n, value)` pairs for plotting, `None` at gaps.
    pub fn xy(&self) -> Vec<Option<(f64, f64)>> {
        self.points
            .iter()
            .map(|p| p.operations.map(|y| (p.n as f64, y)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_visible_pads_with_gaps() {
        let series = GrowthSeries::from_visible(vec![1.0, 2.0, 3.0]);
        assert_eq!(series.points().len(), SAMPLE_COUNT as usize);
        assert_eq!(series.visible_len(), 3);
        assert_eq!(series.value_at(3), Some(3.0));
        assert_eq!(series.value_at(4), None);
        let ns: Vec<u32> = series.points().iter().map(|p| p.n).collect();
        assert_eq!(ns, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_from_visible_truncates_overflow() {
        let series = GrowthSeries::from_visible((0..15).map(|i| i as f64).collect());
        assert_eq!(series.points().len(), 10);
        assert_eq!(series.visible_len(), 10);
    }

    #[test]
    fn test_get_out_of_range() {
        let series = GrowthSeries::from_visible(vec![5.0]);
        assert!(series.get(0).is_none());
        assert!(series.get(11).is_none());
        assert_eq!(series.get(1).map(|p| p.n), Some(1));
    }

    #[test]
    fn test_xy_breaks_at_gaps() {
        let series = GrowthSeries::from_visible(vec![10.0, 20.0]);
        let xy = series.xy();
        assert_eq!(xy[0], Some((1.0, 10.0)));
        assert_eq!(xy[1], Some((2.0, 20.0)));
        assert!(xy[2..].iter().all(Option::is_none));
    }

    #[test]
    fn test_serializes_gaps_as_null() {
        let series = GrowthSeries::from_visible(vec![1.11]);
        let json = serde_json::to_string(&series).unwrap();
        assert!(json.starts_with(r#"[{"n":1,"operations":1.11},{"n":2,"operations":null}"#));
    }
}

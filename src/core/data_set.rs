use tracing::{trace, warn};

use crate::core::domain::DomainValue;
use crate::core::types::{DataPoint, PointId};
use crate::error::{ChartError, ChartResult};

/// Points kept in ascending x order.
///
/// Ties on x keep insertion order; y never takes part in ordering. Every
/// mutation preserves the ordering, so consumers never re-sort.
#[derive(Debug, Clone, PartialEq)]
pub struct DataSet<X = f64> {
    points: Vec<DataPoint<X>>,
    next_id: u64,
}

impl<X> Default for DataSet<X> {
    fn default() -> Self {
        Self {
            points: Vec::new(),
            next_id: 0,
        }
    }
}

impl<X: DomainValue> DataSet<X> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a sorted set, rejecting any point with a non-finite coordinate.
    pub fn from_points<I>(points: I) -> ChartResult<Self>
    where
        I: IntoIterator<Item = DataPoint<X>>,
    {
        let points: Vec<DataPoint<X>> = points.into_iter().collect();
        if let Some(index) = points.iter().position(|point| !point.is_finite()) {
            return Err(ChartError::InvalidData(format!(
                "point at input index {index} has a non-finite coordinate"
            )));
        }
        Ok(Self::from_finite(points))
    }

    /// Builds a sorted set, dropping points with non-finite coordinates.
    #[must_use]
    pub fn from_points_lossy<I>(points: I) -> Self
    where
        I: IntoIterator<Item = DataPoint<X>>,
    {
        let mut points: Vec<DataPoint<X>> = points.into_iter().collect();
        let original_count = points.len();
        points.retain(DataPoint::is_finite);

        let filtered_count = original_count - points.len();
        if filtered_count > 0 {
            warn!(
                filtered_count,
                canonical_count = points.len(),
                "dropped non-finite points"
            );
        }
        Self::from_finite(points)
    }

    fn from_finite(mut points: Vec<DataPoint<X>>) -> Self {
        // `sort_by` is stable, which keeps tied x values in input order.
        points.sort_by(|a, b| a.domain_x().total_cmp(&b.domain_x()));
        let next_id = next_free_id(&points, 0);
        Self { points, next_id }
    }

    /// Inserts `point` after every existing point with an equal or smaller x.
    ///
    /// Returns the sorted index the point landed at.
    pub fn insert(&mut self, point: DataPoint<X>) -> ChartResult<usize> {
        if !point.is_finite() {
            return Err(ChartError::InvalidData(
                "point coordinates must be finite".to_owned(),
            ));
        }

        let x = point.domain_x();
        let index = self.points.partition_point(|existing| existing.domain_x() <= x);
        if let Some(id) = point.id {
            self.next_id = self.next_id.max(id.0.saturating_add(1));
        }
        self.points.insert(index, point);
        trace!(index, count = self.points.len(), "insert data point");
        Ok(index)
    }

    /// Inserts a new point tagged with a fresh identity token.
    pub fn push_with_id(&mut self, x: X, y: f64) -> ChartResult<PointId> {
        let id = PointId(self.next_id);
        self.insert(DataPoint::new(x, y).with_id(id))?;
        Ok(id)
    }

    /// Removes the point at a sorted position.
    pub fn remove(&mut self, index: usize) -> ChartResult<DataPoint<X>> {
        if index >= self.points.len() {
            return Err(ChartError::InvalidData(format!(
                "index {index} out of range for data set of {} points",
                self.points.len()
            )));
        }
        let removed = self.points.remove(index);
        trace!(index, count = self.points.len(), "remove data point");
        Ok(removed)
    }

    /// Removes the first point carrying `id`.
    pub fn remove_id(&mut self, id: PointId) -> Option<DataPoint<X>> {
        let index = self.points.iter().position(|point| point.id == Some(id))?;
        let removed = self.points.remove(index);
        trace!(index, count = self.points.len(), "remove data point by id");
        Some(removed)
    }

    pub fn retain<F>(&mut self, keep: F)
    where
        F: FnMut(&DataPoint<X>) -> bool,
    {
        self.points.retain(keep);
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&DataPoint<X>> {
        self.points.get(index)
    }

    #[must_use]
    pub fn first(&self) -> Option<&DataPoint<X>> {
        self.points.first()
    }

    #[must_use]
    pub fn last(&self) -> Option<&DataPoint<X>> {
        self.points.last()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[DataPoint<X>] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DataPoint<X>> {
        self.points.iter()
    }
}

impl<'a, X> IntoIterator for &'a DataSet<X> {
    type Item = &'a DataPoint<X>;
    type IntoIter = std::slice::Iter<'a, DataPoint<X>>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

fn next_free_id<X>(points: &[DataPoint<X>], floor: u64) -> u64 {
    points
        .iter()
        .filter_map(|point| point.id)
        .map(|id| id.0.saturating_add(1))
        .fold(floor, u64::max)
}

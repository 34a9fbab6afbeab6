use serde::ser::{Serialize, SerializeMap, Serializer};
use uuid::Uuid;

/// Label-keyed values that serialize as a JSON object in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderedMap<V>(pub Vec<(String, V)>);

impl<V> OrderedMap<V> {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.iter().any(|(k, _)| k == key)
    }
}

impl<V: Serialize> Serialize for OrderedMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Runner-up categories, label -> percent string, best first.
pub type TopAlternatives = OrderedMap<String>;

impl TopAlternatives {
    /// Single-cell rendering for the CSV datasets: `"HR (12.5%), Sales (3.0%)"`.
    pub fn summary(&self) -> String {
        self.0
            .iter()
            .map(|(label, percent)| format!("{label} ({percent})"))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// One stored prediction. Also the response body of `POST /api/predict_umum`.
#[derive(Debug, Clone, serde::Serialize)]
pub struct PredictionRecord {
    pub id: Uuid,
    /// predicted category
    pub posisi: String,
    /// redacted resume text
    pub cv_user: String,
    /// adjusted confidence, e.g. `"80.0%"`
    pub probability: String,
    pub top_5_positions: TopAlternatives,
}

/// Flat CSV row for the dataset files.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct DatasetRow {
    pub id: String,
    pub posisi: String,
    pub cv_user: String,
    pub probability: String,
    pub top_5_positions: String,
}

impl From<&PredictionRecord> for DatasetRow {
    fn from(record: &PredictionRecord) -> Self {
        Self {
            id: record.id.to_string(),
            posisi: record.posisi.clone(),
            cv_user: record.cv_user.clone(),
            probability: record.probability.clone(),
            top_5_positions: record.top_5_positions.summary(),
        }
    }
}

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One recipe as returned by the API.
///
/// The listing and detail views read the same record. Every field is
/// optional because the backing dataset has gaps; numeric fields accept
/// numbers, numeric strings, `null` and `"NaN"`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub cuisine: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub rating: Option<f64>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub prep_time: Option<i64>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub cook_time: Option<i64>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub total_time: Option<i64>,
    /// Either free text ("4 servings") or a bare number
    #[serde(default)]
    pub serves: Option<Value>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub calories: Option<i64>,
    #[serde(default)]
    pub description: Option<String>,
    /// JSON array (possibly encoded inside a string) or delimited text
    #[serde(default)]
    pub ingredients: Option<Value>,
    /// JSON array (possibly encoded inside a string) or delimited text
    #[serde(default)]
    pub instructions: Option<Value>,
    /// JSON object (possibly encoded inside a string) or free text
    #[serde(default)]
    pub nutrients: Option<Value>,
}

impl Recipe {
    /// Serving count as display text, `None` when absent, empty or zero.
    pub fn serves_text(&self) -> Option<String> {
        match self.serves.as_ref()? {
            Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
            Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
            _ => None,
        }
    }

    /// Calories worth showing; zero counts as absent.
    pub fn calories_value(&self) -> Option<i64> {
        self.calories.filter(|c| *c != 0)
    }

    /// Cuisine label; missing or empty reads as N/A.
    pub fn cuisine_text(&self) -> &str {
        self.cuisine
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or(crate::format::NOT_AVAILABLE)
    }

    pub fn description_text(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }
}

/// The response envelope shared by the listing and search endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageResult {
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Vec<Recipe>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total: u64,
    #[serde(default, rename = "totalPages")]
    pub total_pages: Option<u32>,
    /// Page size the backend applied, when it echoes one
    #[serde(default)]
    pub limit: Option<u32>,
}

impl PageResult {
    /// Number of pages, never less than one.
    ///
    /// Backends that only report `total` get the count derived from the
    /// page size they echo back, or else the one the request was made with.
    pub fn page_count(&self, requested_limit: u32) -> u32 {
        let limit = self
            .limit
            .filter(|l| *l > 0)
            .unwrap_or(requested_limit);
        match self.total_pages {
            Some(pages) if pages > 0 => pages,
            _ if limit == 0 => 1,
            _ => {
                let pages = self.total.div_ceil(u64::from(limit));
                u32::try_from(pages).unwrap_or(u32::MAX).max(1)
            }
        }
    }
}

/// Active search criteria. All fields absent means "unfiltered".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchFilters {
    pub title: Option<String>,
    pub cuisine: Option<String>,
    pub rating_min: Option<f64>,
    pub rating_max: Option<f64>,
    pub total_time_max: Option<i64>,
    pub calories_max: Option<i64>,
}

impl SearchFilters {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.cuisine.is_none()
            && self.rating_min.is_none()
            && self.rating_max.is_none()
            && self.total_time_max.is_none()
            && self.calories_max.is_none()
    }

    /// API parameter pairs for the filters that are present, in a fixed order.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(title) = &self.title {
            pairs.push(("title", title.clone()));
        }
        if let Some(cuisine) = &self.cuisine {
            pairs.push(("cuisine", cuisine.clone()));
        }
        if let Some(min) = self.rating_min {
            pairs.push(("rating>=", min.to_string()));
        }
        if let Some(max) = self.rating_max {
            pairs.push(("rating<=", max.to_string()));
        }
        if let Some(minutes) = self.total_time_max {
            pairs.push(("total_time<=", minutes.to_string()));
        }
        if let Some(calories) = self.calories_max {
            pairs.push(("calories<=", calories.to_string()));
        }
        pairs
    }
}

/// Raw contents of the search form, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterForm {
    pub title: String,
    pub cuisine: String,
    pub rating_min: String,
    pub rating_max: String,
    pub total_time_max: String,
    pub calories_max: String,
}

impl FilterForm {
    /// Turn the raw inputs into filters.
    ///
    /// Blank text and numbers that do not parse become absent rather than
    /// empty strings, NaN or zero.
    pub fn normalize(&self) -> SearchFilters {
        SearchFilters {
            title: normalize_text(&self.title),
            cuisine: normalize_text(&self.cuisine),
            rating_min: parse_decimal(&self.rating_min),
            rating_max: parse_decimal(&self.rating_max),
            total_time_max: parse_whole(&self.total_time_max),
            calories_max: parse_whole(&self.calories_max),
        }
    }
}

fn normalize_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn parse_decimal(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

fn parse_whole(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}

fn number_from_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|n| n.is_finite())
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(number_from_value))
}

fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(|v| match v {
        Value::Number(n) => n.as_i64(),
        _ => None,
    })
    .or_else(|| value.as_ref().and_then(number_from_value).map(|n| n as i64)))
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

//! Request payload accepted by the recommendation endpoint.

/// Activities and bucket-list destinations supplied by a traveller.
///
/// Both lists default to empty when absent from the JSON body. The
/// `destinations` key is accepted as an alias for `bucket_list`.
///
/// # Examples
/// ```
/// # #[cfg(feature = "serde")]
/// # fn main() -> Result<(), serde_json::Error> {
/// use wanderlist_core::RecommendationRequest;
///
/// let request: RecommendationRequest =
///     serde_json::from_str(r#"{"activities": ["hiking"], "bucket_list": ["Yosemite"]}"#)?;
/// assert_eq!(request.activities, ["hiking"]);
/// assert_eq!(request.bucket_list, ["Yosemite"]);
/// # Ok(())
/// # }
/// # #[cfg(not(feature = "serde"))]
/// # fn main() {}
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecommendationRequest {
    /// Free-text activities the traveller wants to do.
    #[cfg_attr(feature = "serde", serde(default))]
    pub activities: Vec<String>,
    /// Destinations the traveller wants to visit.
    #[cfg_attr(feature = "serde", serde(default, alias = "destinations"))]
    pub bucket_list: Vec<String>,
}

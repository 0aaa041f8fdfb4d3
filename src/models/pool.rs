/// One display-ready trending-pool row. Optional fields stay None when the
/// upstream attribute is null or absent; the renderer decides how to show
/// the gap.
#[derive(Debug, Clone)]
pub struct PoolRow {
    pub id: String,
    pub name: String,
    pub price_usd: Option<f64>,
    /// 24h change pre-formatted to two decimals, e.g. "-3.41".
    pub change_24h: Option<String>,
    pub volume_24h: Option<f64>,
    pub url: Option<String>,
    pub dex: String,
}

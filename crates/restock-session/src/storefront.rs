//! 商店導流網址

/// 組出商店網址：`{store_url}/shop?from={referral}&items={id1},{id2}`
///
/// 每個品項ID各自編碼後再以逗號串接。
pub fn storefront_url<'a, I>(store_url: &str, referral_source: &str, item_ids: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let items = item_ids
        .into_iter()
        .map(|id| urlencoding::encode(id).into_owned())
        .collect::<Vec<_>>()
        .join(",");

    format!(
        "{}/shop?from={}&items={}",
        store_url.trim_end_matches('/'),
        urlencoding::encode(referral_source),
        items
    )
}

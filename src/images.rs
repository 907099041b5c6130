use std::collections::HashMap;

use log::warn;
use once_cell::sync::Lazy;

pub const IMAGE_NOT_FOUND: &str = "#ERROR#";

const BASE_PATH: &str = "/cms/images/icons/bank-page/";

static PAYMENT_IMAGES: Lazy<HashMap<&'static str, String>> = Lazy::new(|| {
    [
        ("Credit Card", "epro_370001.png"),
        ("EPRO", "epro_370001.png"),
        ("Trustly", "trustly_300001.png"),
        ("NETELLER", "neteller_110002.png"),
        ("Skrill", "moneybookers_70002.png"),
        ("paysafecard", "paysafe_10001.png"),
        ("Ecopayz", "ecopayz_240001.png"),
        ("GiroPay", "lateral_130005.png"),
        ("iDeal", "lateral_130011.png"),
        ("P24", "lateral_130013.png"),
        ("SafetyPay", "lateral_130016.png"),
        ("EPS", "lateral_130010.png"),
        ("QIWI", "lateral_130009.png"),
        ("SOFORT (directpay)", "lateral_130006.png"),
        ("Neosurf", "apco_270041.png"),
        ("UPAY", "apco_270041.png"),
    ]
    .into_iter()
    .map(|(title, file)| (title, format!("{}{}", BASE_PATH, file)))
    .collect()
});

/// Asset path for a payment method, or [`IMAGE_NOT_FOUND`] for unknown titles.
pub fn payment_image(title: &str) -> String {
    match PAYMENT_IMAGES.get(title) {
        Some(path) => path.clone(),
        None => {
            warn!("No image known for payment method `{}`", title);
            IMAGE_NOT_FOUND.to_owned()
        }
    }
}

use itertools::Itertools;

use crate::html::concat;
use crate::html::Segment::{RawMarkup, UntrustedText};
use crate::types::{LimitPair, Money, PaymentInfo, RegionalAmount};

const ICON_PATH: &str = "/cms/images/icons/general-icons/";
const DISABLED: &str = "—";

pub fn currency_to_symbol(code: &str) -> &str {
    match code {
        "EUR" => "&euro;",
        "GBP" => "&pound;",
        other => other,
    }
}

fn money_format(money: &Money) -> String {
    let symbols = money
        .currencies
        .iter()
        .map(|c| currency_to_symbol(c.code()))
        .join("/");
    format!("{} {}", symbols, money.value)
}

fn seknok_format(amount: &RegionalAmount) -> String {
    format!("{} {}", amount.seknok.iter().join("/"), amount.value)
}

fn limit_lines(label: &str, limit: &LimitPair) -> String {
    let mut s = String::new();
    if let Some(money) = &limit.money {
        s += &format!("{}: {}", label, money_format(money));
        if limit.seknok.is_some() {
            s += "<br>";
        }
        s += "\n";
    }
    if let Some(seknok) = &limit.seknok {
        s += &format!("{}\n", seknok_format(seknok));
    }
    s
}

/// Renders the min block, a rule, then the max block. Empty sides are omitted.
pub fn minmax_template(min: &LimitPair, max: &LimitPair) -> String {
    let mut s = limit_lines("min", min);
    if !max.is_empty() {
        s += "<hr>\n";
    }
    s += &limit_lines("max", max);
    s
}

fn icon(enabled: bool) -> (&'static str, &'static str) {
    if enabled {
        ("yes.png", "Yes")
    } else {
        ("no.svg", "No")
    }
}

fn payment_template(method: &PaymentInfo) -> String {
    let (deposit_icon, deposit_alt) = icon(method.is_deposit);
    let (withdraw_icon, withdraw_alt) = icon(method.is_withdraw);
    let deposit_limits = if method.is_deposit {
        minmax_template(&method.min_deposit, &method.max_deposit)
    } else {
        DISABLED.to_owned()
    };
    let withdraw_limits = if method.is_withdraw {
        minmax_template(&method.min_withdrawal, &method.max_withdrawal)
    } else {
        DISABLED.to_owned()
    };

    concat(&[
        RawMarkup("\n    <!-- "),
        UntrustedText(&method.title),
        RawMarkup(
            " -->
    <accordion-group is-open=\"false\">
        <accordion-heading>
            <div class=\"bankingItem__header\">
                <img height=\"32\" src=\"",
        ),
        RawMarkup(&method.image),
        RawMarkup("\" alt=\""),
        UntrustedText(&method.title),
        RawMarkup(
            "\" class=\"staticPageWrapper__paymentImage\">
            </div>
        </accordion-heading>
        <div class=\"accordion-body filter-text-content\">
            <div class=\"bankingItem__body\">
                <div class=\"bankingItem__property\">
                    <div class=\"bankingItem__propertyKey\">Deposit</div>
                    <div class=\"bankingItem__propertyValue\">
                        <img width=\"24\" height=\"24\" src=\"",
        ),
        RawMarkup(ICON_PATH),
        RawMarkup(deposit_icon),
        RawMarkup("\" alt=\""),
        RawMarkup(deposit_alt),
        RawMarkup(
            "\">
                    </div>
                </div>
                <div class=\"bankingItem__property\">
                    <div class=\"bankingItem__propertyKey\">Withdraw</div>
                    <div class=\"bankingItem__propertyValue\">
                        <img width=\"24\" height=\"24\" src=\"",
        ),
        RawMarkup(ICON_PATH),
        RawMarkup(withdraw_icon),
        RawMarkup("\" alt=\""),
        RawMarkup(withdraw_alt),
        RawMarkup(
            "\">
                    </div>
                </div>
                <div class=\"bankingItem__property\">
                    <div class=\"bankingItem__propertyKey\">Free fixed</div>
                    <div class=\"bankingItem__propertyValue\">",
        ),
        UntrustedText(&method.free_fixed),
        RawMarkup(
            "</div>
                </div>
                <div class=\"bankingItem__property\">
                    <div class=\"bankingItem__propertyKey\">Free %</div>
                    <div class=\"bankingItem__propertyValue\">",
        ),
        UntrustedText(&method.free_percent),
        RawMarkup(
            "</div>
                </div>
                <div class=\"bankingItem__property\">
                    <div class=\"bankingItem__propertyKey\">Min/Max<br>deposit</div>
                    <div class=\"bankingItem__propertyValue\">
                      ",
        ),
        RawMarkup(&deposit_limits),
        RawMarkup(
            "
                    </div>
                </div>
                <div class=\"bankingItem__property\">
                    <div class=\"bankingItem__propertyKey\">Min/Max<br>Withdrawal</div>
                    <div class=\"bankingItem__propertyValue\">
                        ",
        ),
        RawMarkup(&withdraw_limits),
        RawMarkup(
            "
                    </div>
                </div>
            </div>
        </div>
    </accordion-group>
    ",
        ),
    ])
}

/// Renders the accordion fragment, one group per payment method.
pub fn payment_methods_template(methods: &[PaymentInfo]) -> String {
    let groups: String = methods.iter().map(payment_template).collect();
    concat(&[
        RawMarkup("\n  <accordion id=\"faq-accordion\" close-others=\"false\">\n  "),
        RawMarkup(&groups),
        RawMarkup("\n  </accordion>\n  "),
    ])
}

#[cfg(test)]
mod tests {
    use crate::types::{Currency, Region};

    use super::*;

    fn money(value: &str, currencies: Vec<Currency>) -> Option<Money> {
        Some(Money {
            value: value.to_owned(),
            currencies,
        })
    }

    fn regional(value: &str, seknok: Vec<Region>) -> Option<RegionalAmount> {
        Some(RegionalAmount {
            value: value.to_owned(),
            seknok,
        })
    }

    fn method(title: &str) -> PaymentInfo {
        PaymentInfo {
            title: title.to_owned(),
            image: "/img.png".to_owned(),
            is_deposit: true,
            is_withdraw: false,
            free_fixed: "0".to_owned(),
            free_percent: "0".to_owned(),
            min_deposit: LimitPair {
                money: money("10", vec![Currency::Eur]),
                seknok: None,
            },
            max_deposit: LimitPair {
                money: money("500", vec![Currency::Eur]),
                seknok: None,
            },
            min_withdrawal: LimitPair::default(),
            max_withdrawal: LimitPair::default(),
        }
    }

    #[test]
    fn test_currency_to_symbol() {
        assert_eq!(currency_to_symbol("EUR"), "&euro;");
        assert_eq!(currency_to_symbol("GBP"), "&pound;");
        assert_eq!(currency_to_symbol("USD"), "USD");
    }

    #[test]
    fn test_minmax_money_only() {
        let min = LimitPair {
            money: money("10", vec![Currency::Eur]),
            seknok: None,
        };
        let max = LimitPair {
            money: money("500", vec![Currency::Eur, Currency::Gbp]),
            seknok: None,
        };
        let actual = minmax_template(&min, &max);
        assert_eq!(actual, "min: &euro; 10\n<hr>\nmax: &euro;/&pound; 500\n");
    }

    #[test]
    fn test_minmax_with_regional() {
        let min = LimitPair {
            money: money("10", vec![Currency::Eur]),
            seknok: regional("100", vec![Region::Sek, Region::Nok]),
        };
        let max = LimitPair {
            money: None,
            seknok: regional("5000", vec![Region::Sek]),
        };
        let actual = minmax_template(&min, &max);
        assert_eq!(
            actual,
            "min: &euro; 10<br>\nSEK/NOK 100\n<hr>\nSEK 5000\n"
        );
    }

    #[test]
    fn test_minmax_empty() {
        let actual = minmax_template(&LimitPair::default(), &LimitPair::default());
        assert_eq!(actual, "");

        let min = LimitPair {
            money: money("10", vec![Currency::Gbp]),
            seknok: None,
        };
        let actual = minmax_template(&min, &LimitPair::default());
        assert_eq!(actual, "min: &pound; 10\n");
    }

    #[test]
    fn test_payment_template() {
        let actual = payment_methods_template(&[method("Trustly")]);

        assert!(actual.contains("<accordion id=\"faq-accordion\" close-others=\"false\">"));
        assert!(actual.contains("<!-- Trustly -->"));
        assert!(actual.contains("src=\"/img.png\" alt=\"Trustly\""));
        assert!(actual.contains("general-icons/yes.png\" alt=\"Yes\""));
        assert!(actual.contains("general-icons/no.svg\" alt=\"No\""));
        assert!(actual.contains("min: &euro; 10\n<hr>\nmax: &euro; 500\n"));
        assert_eq!(actual.matches('—').count(), 1);
        assert_eq!(actual.matches("<accordion-group").count(), 1);
        assert!(actual.trim_end().ends_with("</accordion>"));
    }

    #[test]
    fn test_untrusted_fields_are_escaped() {
        let mut m = method("<b>Pay & Go</b>");
        m.free_fixed = "\"1\"".to_owned();
        let actual = payment_methods_template(&[m]);

        assert!(actual.contains("<!-- &lt;b&gt;Pay &amp; Go&lt;/b&gt; -->"));
        assert!(actual.contains("alt=\"&lt;b&gt;Pay &amp; Go&lt;/b&gt;\""));
        assert!(actual.contains(">&quot;1&quot;</div>"));
        assert!(!actual.contains("<b>Pay"));
    }

    #[test]
    fn test_empty_list() {
        let actual = payment_methods_template(&[]);
        assert!(actual.contains("<accordion id=\"faq-accordion\""));
        assert!(!actual.contains("accordion-group"));
    }
}

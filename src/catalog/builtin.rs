//! Built-in brand tables.
//!
//! Full-number patterns are written without look-around so they compile with
//! the `regex` crate. Where two schemes share a prefix range (Elo inside the
//! Visa, Aura, Discover and UnionPay ranges) the wider scheme's pattern spells
//! out the complement of the narrower one, keeping every pair of full-number
//! patterns disjoint.
//!
//! Both tables are in catalog order (alphabetical by name). Detailed records
//! carry issuing countries but no source rules or per-BIN metadata.

use super::{Brand, BrandDetailed, CardType, CvvRules, NumberRules, GLOBAL};
use std::borrow::Cow;

const fn brand(
    name: &'static str,
    regexp_bin: &'static str,
    regexp_full: &'static str,
    regexp_cvv: &'static str,
) -> Brand {
    Brand {
        name: Cow::Borrowed(name),
        regexp_bin: Cow::Borrowed(regexp_bin),
        regexp_full: Cow::Borrowed(regexp_full),
        regexp_cvv: Cow::Borrowed(regexp_cvv),
    }
}

const fn detailed(
    scheme: &'static str,
    display: &'static str,
    card_type: CardType,
    lengths: &'static [u8],
    luhn: bool,
    cvv_lengths: &'static [u8],
    countries: &'static [Cow<'static, str>],
) -> BrandDetailed {
    BrandDetailed {
        scheme: Cow::Borrowed(scheme),
        brand: Cow::Borrowed(display),
        card_type,
        number: NumberRules {
            lengths: Cow::Borrowed(lengths),
            luhn,
        },
        cvv: CvvRules {
            lengths: Cow::Borrowed(cvv_lengths),
        },
        countries: Cow::Borrowed(countries),
        patterns: Vec::new(),
        bins: Vec::new(),
    }
}

const WORLDWIDE: &[Cow<'static, str>] = &[Cow::Borrowed(GLOBAL)];
const BRAZIL: &[Cow<'static, str>] = &[Cow::Borrowed("BR")];

const CVV_3: &str = r"^[0-9]{3}$";
const CVV_4: &str = r"^[0-9]{4}$";

/// Basic brand table, in catalog order.
pub static BRANDS: &[Brand] = &[
    // American Express: 34, 37
    brand("amex", r"^3[47]", r"^3[47][0-9]{13}$", CVV_4),
    // Aura: 500-508, minus the Elo BINs 504175 and 506699-506778
    brand(
        "aura",
        r"^(?:50[0-3578]|504(?:[02-9][0-9]{2}|1[0-689][0-9]|17[0-46-9])|506(?:[0-5][0-9]{2}|6[0-8][0-9]|69[0-8]|779|7[89][0-9]|[89][0-9]{2}))",
        r"^(?:50[0-3578][0-9]{3}|504(?:[02-9][0-9]{2}|1[0-689][0-9]|17[0-46-9])|506(?:[0-5][0-9]{2}|6[0-8][0-9]|69[0-8]|779|7[89][0-9]|[89][0-9]{2}))[0-9]{10}(?:[0-9]{3})?$",
        CVV_3,
    ),
    // Diners Club: 300-305, 309, 36, 38
    brand(
        "diners",
        r"^(?:30[0-59]|3[68])",
        r"^(?:30[0-59][0-9]|3[68][0-9]{2})[0-9]{10}$",
        CVV_3,
    ),
    // Discover: 6011, 644-649, 65 minus the Elo BINs in 650, 651 and 655
    brand(
        "discover",
        r"^(?:6011|64[4-9]|65[2-46-9]|650(?:0[0-2][0-9]|03[04]|05[2-9]|0[6-9][0-9]|[1-3][0-9]{2}|40[0-4]|4[4-7][0-9]|48[0-4]|539|540|599|6[0-9]{2}|719|72[89]|7[3-9][0-9]|8[0-9]{2}|900|92[1-9]|9[3-9][0-9])|651(?:[0-5][0-9]{2}|6[0-4][0-9]|65[01]|6[89][0-9]|[7-9][0-9]{2})|655(?:020|059|0[6-9][0-9]|[1-9][0-9]{2}))",
        r"^(?:6011[0-9]{2}|64[4-9][0-9]{3}|65[2-46-9][0-9]{3}|650(?:0[0-2][0-9]|03[04]|05[2-9]|0[6-9][0-9]|[1-3][0-9]{2}|40[0-4]|4[4-7][0-9]|48[0-4]|539|540|599|6[0-9]{2}|719|72[89]|7[3-9][0-9]|8[0-9]{2}|900|92[1-9]|9[3-9][0-9])|651(?:[0-5][0-9]{2}|6[0-4][0-9]|65[01]|6[89][0-9]|[7-9][0-9]{2})|655(?:020|059|0[6-9][0-9]|[1-9][0-9]{2}))[0-9]{10,13}$",
        CVV_3,
    ),
    // Elo: fixed BINs and ranges spread over the 4, 50, 62, 63 and 65 prefixes
    brand(
        "elo",
        r"^(?:40117[89]|431274|438935|451416|457393|45763[12]|504175|506699|5067[0-6][0-9]|50677[0-8]|509[0-9]{3}|627780|636297|636368|65003[1-35-9]|65004[0-9]|65005[01]|65040[5-9]|6504[1-3][0-9]|65048[5-9]|65049[0-9]|6505[0-2][0-9]|65053[0-8]|65054[1-9]|6505[5-8][0-9]|65059[0-8]|65070[0-9]|65071[0-8]|65072[0-7]|65090[1-9]|65091[0-9]|650920|65165[2-9]|6516[67][0-9]|65500[0-9]|65501[0-9]|65502[1-9]|6550[34][0-9]|65505[0-8])",
        r"^(?:40117[89]|431274|438935|451416|457393|45763[12]|504175|506699|5067[0-6][0-9]|50677[0-8]|509[0-9]{3}|627780|636297|636368|65003[1-35-9]|65004[0-9]|65005[01]|65040[5-9]|6504[1-3][0-9]|65048[5-9]|65049[0-9]|6505[0-2][0-9]|65053[0-8]|65054[1-9]|6505[5-8][0-9]|65059[0-8]|65070[0-9]|65071[0-8]|65072[0-7]|65090[1-9]|65091[0-9]|650920|65165[2-9]|6516[67][0-9]|65500[0-9]|65501[0-9]|65502[1-9]|6550[34][0-9]|65505[0-8])[0-9]{10}$",
        CVV_3,
    ),
    // Hipercard: 606282 and 384100, 384140, 384160
    brand(
        "hipercard",
        r"^(?:606282|3841[046]0)",
        r"^(?:606282|3841[046]0)[0-9]{10}(?:[0-9]{3})?$",
        CVV_3,
    ),
    // JCB: 3528-3589
    brand(
        "jcb",
        r"^(?:352[89]|35[3-8][0-9])",
        r"^(?:352[89]|35[3-8][0-9])[0-9]{12,15}$",
        CVV_3,
    ),
    // Maestro: 5893, 6304, 6759, 6761-6763
    brand(
        "maestro",
        r"^(?:5893|6304|6759|676[1-3])",
        r"^(?:5893|6304|6759|676[1-3])[0-9]{8,15}$",
        CVV_3,
    ),
    // Mastercard: 51-55, 2221-2720
    brand(
        "mastercard",
        r"^(?:5[1-5]|222[1-9]|22[3-9][0-9]|2[3-6][0-9]{2}|27[01][0-9]|2720)",
        r"^(?:5[1-5][0-9]{2}|222[1-9]|22[3-9][0-9]|2[3-6][0-9]{2}|27[01][0-9]|2720)[0-9]{12}$",
        CVV_3,
    ),
    // UnionPay: 62 minus the Elo BIN 627780
    brand(
        "unionpay",
        r"^(?:62[0-689]|627(?:[0-689][0-9]{2}|7(?:[0-79][0-9]|8[1-9])))",
        r"^(?:62[0-689][0-9]{3}|627(?:[0-689][0-9]{2}|7(?:[0-79][0-9]|8[1-9])))[0-9]{10,13}$",
        CVV_3,
    ),
    // Visa: 4 minus the Elo BINs 401178, 401179, 431274, 438935, 451416,
    // 457393, 457631 and 457632, plus 6367
    brand(
        "visa",
        r"^(?:4(?:[1246-9]|0(?:[02-9]|1(?:[02-9]|1(?:[0-689]|7[0-7])))|3(?:[02-79]|1(?:[013-9]|2(?:[0-689]|7[0-35-9]))|8(?:[0-8]|9(?:[0-24-9]|3[0-46-9])))|5(?:[02-689]|1(?:[0-35-9]|4(?:[02-9]|1[0-57-9]))|7(?:[0-2457-9]|3(?:[0-8]|9[0-24-9])|6(?:[0-24-9]|3[03-9]))))|6367)",
        r"^(?:4(?:[1246-9][0-9]{4}|0(?:[02-9][0-9]{3}|1(?:[02-9][0-9]{2}|1(?:[0-689][0-9]|7[0-7])))|3(?:[02-79][0-9]{3}|1(?:[013-9][0-9]{2}|2(?:[0-689][0-9]|7[0-35-9]))|8(?:[0-8][0-9]{2}|9(?:[0-24-9][0-9]|3[0-46-9])))|5(?:[02-689][0-9]{3}|1(?:[0-35-9][0-9]{2}|4(?:[02-9][0-9]|1[0-57-9]))|7(?:[0-2457-9][0-9]{2}|3(?:[0-8][0-9]|9[0-24-9])|6(?:[0-24-9][0-9]|3[03-9]))))|6367[0-9]{2})(?:[0-9]{7}|[0-9]{10}|[0-9]{13})$",
        CVV_3,
    ),
];

/// Detailed brand table, in catalog order.
pub static BRANDS_DETAILED: &[BrandDetailed] = &[
    detailed("amex", "American Express", CardType::Credit, &[15], true, &[4], WORLDWIDE),
    detailed("aura", "Aura", CardType::Credit, &[16, 19], true, &[3], BRAZIL),
    detailed("diners", "Diners Club", CardType::Credit, &[14], true, &[3], WORLDWIDE),
    detailed("discover", "Discover", CardType::Credit, &[16, 17, 18, 19], true, &[3], WORLDWIDE),
    detailed("elo", "Elo", CardType::Credit, &[16], true, &[3], BRAZIL),
    detailed("hipercard", "Hipercard", CardType::Credit, &[16, 19], true, &[3], BRAZIL),
    detailed("jcb", "JCB", CardType::Credit, &[16, 17, 18, 19], true, &[3], WORLDWIDE),
    detailed(
        "maestro",
        "Maestro",
        CardType::Debit,
        &[12, 13, 14, 15, 16, 17, 18, 19],
        true,
        &[3],
        WORLDWIDE,
    ),
    detailed("mastercard", "Mastercard", CardType::Credit, &[16], true, &[3], WORLDWIDE),
    // UnionPay does not mandate the Luhn check digit on all its ranges
    detailed("unionpay", "UnionPay", CardType::Credit, &[16, 17, 18, 19], false, &[3], WORLDWIDE),
    detailed("visa", "Visa", CardType::Credit, &[13, 16, 19], true, &[3], WORLDWIDE),
];

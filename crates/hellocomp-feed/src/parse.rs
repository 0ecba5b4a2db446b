//! Event-based parser for the Heureka `<SHOPITEM>` export.
//!
//! Field-level laxness is deliberate: a missing child element leaves the
//! corresponding [`RawFeedItem`] field as an empty string and never fails
//! the item, while a malformed XML document fails the whole run — there is
//! no useful partial catalogue to publish from a truncated export.

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::FeedError;
use crate::types::RawFeedItem;

/// Parses the full feed document into per-item field sets.
///
/// # Errors
///
/// Returns [`FeedError::Xml`] when the document is not well-formed.
pub fn parse_feed(xml: &str) -> Result<Vec<RawFeedItem>, FeedError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut items = Vec::new();
    let mut item = RawFeedItem::default();
    let mut in_item = false;
    let mut in_param = false;
    let mut param_name = String::new();
    let mut param_val = String::new();
    let mut current_text = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let name_buf = e.name().as_ref().to_vec();
                let name = std::str::from_utf8(&name_buf).unwrap_or("");
                match name {
                    "SHOPITEM" => {
                        in_item = true;
                        in_param = false;
                        item = RawFeedItem::default();
                    }
                    "PARAM" if in_item => {
                        in_param = true;
                        param_name.clear();
                        param_val.clear();
                    }
                    _ => {}
                }
                current_text.clear();
            }
            Ok(Event::Text(e)) => {
                let text = e.unescape().unwrap_or_default();
                current_text.push_str(&text);
            }
            Ok(Event::CData(e)) => {
                current_text.push_str(&String::from_utf8_lossy(e.as_ref()));
            }
            Ok(Event::End(e)) => {
                let name_buf = e.name().as_ref().to_vec();
                let name = std::str::from_utf8(&name_buf).unwrap_or("");
                let text = current_text.trim().to_string();
                current_text.clear();

                if !in_item {
                    continue;
                }

                if in_param {
                    match name {
                        "PARAM_NAME" => param_name = text,
                        "VAL" => param_val = text,
                        "PARAM" => {
                            in_param = false;
                            if !param_name.is_empty() && !param_val.is_empty() {
                                item.params
                                    .push((std::mem::take(&mut param_name), std::mem::take(&mut param_val)));
                            }
                        }
                        _ => {}
                    }
                    continue;
                }

                match name {
                    "ITEM_ID" => item.id = text,
                    "PRODUCTNAME" => item.name = text,
                    "URL" => item.url = text,
                    "IMGURL" => item.img = text,
                    "IMGURL_ALTERNATIVE" => {
                        if !text.is_empty() {
                            item.alt_imgs.push(text);
                        }
                    }
                    "PRICE_VAT" => item.price_vat = text,
                    "MANUFACTURER" => item.manufacturer = text,
                    "CATEGORYTEXT" => item.category_text = text,
                    "EAN" => item.ean = text,
                    "DELIVERY_DATE" => item.delivery_date = text,
                    "SHOPITEM" => {
                        in_item = false;
                        items.push(std::mem::take(&mut item));
                    }
                    _ => {}
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(FeedError::Xml(e)),
            _ => {}
        }
    }

    Ok(items)
}

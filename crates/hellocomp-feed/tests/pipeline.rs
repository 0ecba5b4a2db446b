//! End-to-end pipeline test: raw feed XML in, catalogue JSON contract out.
//!
//! Exercises the parse → classify/extract/detect/normalize → assemble
//! chain on one realistic multi-item document and pins the observable
//! JSON contract (key names, slug tokens, ordering, counts).

use hellocomp_core::CategorySlug;
use hellocomp_feed::{build_catalogue, parse_feed};

const FEED_XML: &str = r#"<SHOP>
  <SHOPITEM>
    <ITEM_ID>2001</ITEM_ID>
    <PRODUCTNAME>AMD Radeon RX 9070 XT</PRODUCTNAME>
    <URL>https://www.hellocomp.cz/rx-9070-xt</URL>
    <IMGURL>https://www.hellocomp.cz/img/2001.jpg</IMGURL>
    <PRICE_VAT>18 490,00</PRICE_VAT>
    <MANUFACTURER>AMD</MANUFACTURER>
    <CATEGORYTEXT>Heureka.cz | Počítače a notebooky | Grafické karty</CATEGORYTEXT>
    <EAN>4710562243001</EAN>
    <DELIVERY_DATE>0</DELIVERY_DATE>
  </SHOPITEM>
  <SHOPITEM>
    <ITEM_ID>1001</ITEM_ID>
    <PRODUCTNAME>HelloComp GAMER SE RTX 5060</PRODUCTNAME>
    <URL>https://www.hellocomp.cz/gamer-se-rtx-5060</URL>
    <IMGURL>https://www.hellocomp.cz/img/1001.jpg</IMGURL>
    <IMGURL_ALTERNATIVE>https://www.hellocomp.cz/img/1001-b.jpg</IMGURL_ALTERNATIVE>
    <PRICE_VAT>24 990,00</PRICE_VAT>
    <MANUFACTURER>HelloComp</MANUFACTURER>
    <CATEGORYTEXT>Heureka.cz | Počítače a notebooky | Stolní počítače</CATEGORYTEXT>
    <EAN>8591234500011</EAN>
    <DELIVERY_DATE>0</DELIVERY_DATE>
    <PARAM>
      <PARAM_NAME>Typ procesoru</PARAM_NAME>
      <VAL>AMD Ryzen 5 7500F</VAL>
    </PARAM>
    <PARAM>
      <PARAM_NAME>Model grafické karty</PARAM_NAME>
      <VAL>NVIDIA GeForce RTX 5060</VAL>
    </PARAM>
    <PARAM>
      <PARAM_NAME>Typ PC</PARAM_NAME>
      <VAL>Herní PC</VAL>
    </PARAM>
  </SHOPITEM>
  <SHOPITEM>
    <ITEM_ID>1002</ITEM_ID>
    <PRODUCTNAME>HelloComp GAMER Max RTX 5090</PRODUCTNAME>
    <URL>https://www.hellocomp.cz/gamer-max-rtx-5090</URL>
    <IMGURL>https://www.hellocomp.cz/img/1002.jpg</IMGURL>
    <PRICE_VAT>89 990,00</PRICE_VAT>
    <MANUFACTURER>HelloComp</MANUFACTURER>
    <CATEGORYTEXT>Heureka.cz | Počítače a notebooky | Stolní počítače</CATEGORYTEXT>
    <EAN>8591234500028</EAN>
    <DELIVERY_DATE>14</DELIVERY_DATE>
  </SHOPITEM>
  <SHOPITEM>
    <ITEM_ID>3001</ITEM_ID>
    <PRODUCTNAME>Herní židle ErgoRace</PRODUCTNAME>
    <URL>https://www.hellocomp.cz/zidle-ergorace</URL>
    <IMGURL>https://www.hellocomp.cz/img/3001.jpg</IMGURL>
    <PRICE_VAT></PRICE_VAT>
    <MANUFACTURER>ErgoRace</MANUFACTURER>
    <CATEGORYTEXT>Heureka.cz | Nábytek | Herní židle</CATEGORYTEXT>
    <EAN></EAN>
  </SHOPITEM>
</SHOP>"#;

#[test]
fn full_pipeline_produces_contracted_catalogue() {
    let items = parse_feed(FEED_XML).expect("fixture feed should parse");
    assert_eq!(items.len(), 4);

    let catalogue = build_catalogue(items, "https://www.hellocomp.cz/heureka/export/products.xml");

    // Ordering: pc items by price descending, then gpu, then other.
    let ids: Vec<&str> = catalogue.products.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["1002", "1001", "2001", "3001"]);

    // Counts are derived from the emitted list.
    assert_eq!(catalogue.meta.total_products, 4);
    assert_eq!(catalogue.meta.categories[&CategorySlug::Pc], 2);
    assert_eq!(catalogue.meta.categories[&CategorySlug::Gpu], 1);
    assert_eq!(catalogue.meta.categories[&CategorySlug::Other], 1);

    let flagship = &catalogue.products[0];
    assert_eq!(flagship.lineup, "Max");
    assert!(!flagship.in_stock, "delivery code 14 is not in stock");
    assert_eq!(flagship.price_formatted, "89 990 Kč");

    let se_build = &catalogue.products[1];
    assert_eq!(se_build.lineup, "SE");
    assert!(se_build.in_stock);
    assert_eq!(se_build.specs.cpu.as_deref(), Some("AMD Ryzen 5 7500F"));
    assert_eq!(se_build.specs.pc_type.as_deref(), Some("Herní PC"));

    let chair = &catalogue.products[3];
    assert_eq!(chair.category.slug, CategorySlug::Other);
    assert_eq!(chair.price, 0.0);
    assert_eq!(chair.price_formatted, "");
    assert_eq!(chair.lineup, "");
}

#[test]
fn serialized_catalogue_matches_site_generator_contract() {
    let items = parse_feed(FEED_XML).expect("fixture feed should parse");
    let catalogue = build_catalogue(items, "https://www.hellocomp.cz/heureka/export/products.xml");

    let value = serde_json::to_value(&catalogue).expect("catalogue serializes");

    let meta = &value["meta"];
    assert_eq!(meta["source"], "heureka");
    assert_eq!(
        meta["feedUrl"],
        "https://www.hellocomp.cz/heureka/export/products.xml"
    );
    assert_eq!(meta["totalProducts"], 4);
    assert_eq!(meta["categories"]["pc"], 2);

    let se_build = &value["products"][1];
    assert_eq!(se_build["id"], "1001");
    assert_eq!(se_build["priceFormatted"], "24 990 Kč");
    assert_eq!(se_build["inStock"], true);
    assert_eq!(se_build["category"]["slug"], "pc");
    assert_eq!(se_build["category"]["last"], "Stolní počítače");
    assert_eq!(se_build["specs"]["pcType"], "Herní PC");
    assert_eq!(
        se_build["altImgs"][0],
        "https://www.hellocomp.cz/img/1001-b.jpg"
    );

    // Items without alternate images omit the key entirely.
    assert!(value["products"][0].get("altImgs").is_none());
    // Unpopulated spec keys are absent, not null.
    assert!(value["products"][3]["specs"].as_object().unwrap().is_empty());
}

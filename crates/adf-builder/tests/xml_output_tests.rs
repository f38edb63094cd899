use adf_builder::{build, Attributes, Document, Result, Scalar};
use pretty_assertions::assert_eq;

fn minimal_lead(adf: &mut Document) -> Result<()> {
    adf.prospect(|prospect| {
        prospect.request_date("2024-06-15");
        prospect.vehicle(|vehicle| {
            vehicle.year(2024).make("Toyota").model("Camry");
            Ok(())
        })?;
        prospect.customer(|customer| {
            customer.contact(|contact| {
                contact.name("John Doe").part("full");
                contact.email("john@example.com");
                Ok(())
            })?;
            Ok(())
        })?;
        prospect.vendor(|vendor| {
            vendor.vendor_name("Example Motors");
            vendor.contact(|contact| {
                contact.name("Sales Desk");
                contact.phone("555-0100").kind("voice");
                Ok(())
            })?;
            Ok(())
        })?;
        Ok(())
    })?;
    Ok(())
}

fn element_children<'a, 'input>(
    node: roxmltree::Node<'a, 'input>,
) -> Vec<roxmltree::Node<'a, 'input>> {
    node.children().filter(roxmltree::Node::is_element).collect()
}

#[test]
fn test_output_is_well_formed() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let xml = build(minimal_lead)?;
    let doc = roxmltree::Document::parse(&xml)?;
    let root = doc.root_element();
    assert!(root.has_tag_name("adf"));

    let prospects = element_children(root);
    assert_eq!(prospects.len(), 1);
    let prospect = prospects[0];
    assert_eq!(prospect.attribute("status"), Some("new"));

    let names: Vec<&str> = element_children(prospect)
        .iter()
        .map(|n| n.tag_name().name())
        .collect();
    assert_eq!(names, vec!["requestdate", "vehicle", "customer", "vendor"]);
    Ok(())
}

#[test]
fn test_leaf_values_round_trip() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let xml = build(minimal_lead)?;
    let doc = roxmltree::Document::parse(&xml)?;

    let text_of = |tag: &str| {
        doc.descendants()
            .find(|n| n.has_tag_name(tag))
            .and_then(|n| n.text())
            .map(str::to_owned)
    };
    assert_eq!(text_of("year").as_deref(), Some("2024"));
    assert_eq!(text_of("make").as_deref(), Some("Toyota"));
    assert_eq!(text_of("vendorname").as_deref(), Some("Example Motors"));

    let name = doc.descendants().find(|n| n.has_tag_name("name"));
    assert_eq!(name.and_then(|n| n.attribute("part")), Some("full"));
    let phone = doc.descendants().find(|n| n.has_tag_name("phone"));
    assert_eq!(phone.and_then(|n| n.attribute("type")), Some("voice"));
    Ok(())
}

#[test]
fn test_special_characters_round_trip() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let comments = r#"Trade-in "as is" & <no> warranty"#;
    let xml = build(|adf| {
        minimal_lead(adf)?;
        if let Some(mut prospect) = adf.first_prospect_mut() {
            for mut vehicle in prospect.vehicles_mut() {
                vehicle.comments(comments);
                vehicle.image_tag("http://img.example/a.jpg?x=1&y=2").alt_text(comments);
            }
        }
        Ok(())
    })?;
    assert!(xml.contains("&amp; &lt;no&gt;"));

    let doc = roxmltree::Document::parse(&xml)?;
    let comment = doc.descendants().find(|n| n.has_tag_name("comments"));
    assert_eq!(comment.and_then(|n| n.text()), Some(comments));
    let image = doc.descendants().find(|n| n.has_tag_name("imagetag"));
    assert_eq!(image.and_then(|n| n.attribute("alttext")), Some(comments));
    assert_eq!(
        image.and_then(|n| n.text()),
        Some("http://img.example/a.jpg?x=1&y=2")
    );
    Ok(())
}

#[test]
fn test_open_extension_elements() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let xml = build(|adf| {
        minimal_lead(adf)?;
        if let Some(mut prospect) = adf.first_prospect_mut() {
            prospect.child("custom_tag", "Custom Value").set("type", "urgent");
            prospect.child_with(
                "flagged",
                None,
                Attributes::from([
                    ("source", Scalar::from("web")),
                    ("reason", Scalar::from("vip")),
                ]),
            );
            prospect.nested("meta_data", |meta| {
                meta.child("campaign", "Spring");
                meta.child("campaign_id", 12_345);
                Ok(())
            })?;
        }
        Ok(())
    })?;

    assert!(xml.contains(r#"<custom_tag type="urgent">Custom Value</custom_tag>"#));
    let doc = roxmltree::Document::parse(&xml)?;

    let flagged = doc.descendants().find(|n| n.has_tag_name("flagged"));
    assert_eq!(flagged.and_then(|n| n.attribute("source")), Some("web"));
    let reason = flagged
        .and_then(|n| n.children().find(|c| c.has_tag_name("reason")))
        .and_then(|n| n.text());
    assert_eq!(reason, Some("vip"));

    let meta = doc.descendants().find(|n| n.has_tag_name("meta_data"));
    let meta_children: Vec<&str> = meta
        .map(element_children)
        .unwrap_or_default()
        .iter()
        .map(|n| n.tag_name().name())
        .collect();
    assert_eq!(meta_children, vec!["campaign", "campaign_id"]);
    Ok(())
}

#[test]
fn test_pretty_layout() -> Result<()> {
    let xml = build(minimal_lead)?;
    let expected = concat!(
        "<?xml version=\"1.0\"?>\n",
        "<?ADF version=\"1.0\"?>\n",
        "<adf>\n",
        "  <prospect status=\"new\">\n",
        "    <requestdate>2024-06-15</requestdate>\n",
        "    <vehicle status=\"new\" interest=\"buy\">\n",
        "      <year>2024</year>\n",
        "      <make>Toyota</make>\n",
        "      <model>Camry</model>\n",
        "    </vehicle>\n",
        "    <customer>\n",
        "      <contact>\n",
        "        <name part=\"full\">John Doe</name>\n",
        "        <email>john@example.com</email>\n",
        "      </contact>\n",
        "    </customer>\n",
        "    <vendor>\n",
        "      <vendorname>Example Motors</vendorname>\n",
        "      <contact>\n",
        "        <name>Sales Desk</name>\n",
        "        <phone type=\"voice\">555-0100</phone>\n",
        "      </contact>\n",
        "    </vendor>\n",
        "  </prospect>\n",
        "</adf>\n",
    );
    assert_eq!(xml, expected);
    Ok(())
}

//! The `tagsort init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    let path = std::path::Path::new("tags.json");
    if path.exists() {
        println!("tags.json already exists, skipping.");
    } else {
        std::fs::write(path, STARTER_CATALOG)?;
        println!("Created tags.json");
    }

    println!("\nNext steps:");
    println!("  1. Edit tags.json with your own answer sets");
    println!("  2. Run: tagsort validate --catalog tags.json");
    println!("  3. Run: tagsort play --catalog tags.json");

    Ok(())
}

const STARTER_CATALOG: &str = r#"{
    "default": [
        {
            "label": "Relaxed",
            "correct": true,
            "feedback": "The even lighting and soft edges give the scene a calm feel."
        },
        {
            "label": "Chaotic",
            "correct": false,
            "feedback": "The composition is orderly, with little visual clutter."
        },
        {
            "label": "Serene",
            "correct": true,
            "feedback": "Still water and open space read as serene."
        },
        {
            "label": "Crowded",
            "correct": false,
            "feedback": "There are very few subjects in the frame."
        },
        {
            "label": "Natural",
            "correct": true,
            "feedback": "No artificial structures are visible."
        }
    ],
    "portrait": [
        {
            "label": "Formal",
            "correct": true,
            "feedback": "The subject is posed and centered."
        },
        {
            "label": "Candid",
            "correct": false,
            "feedback": "Nothing about the framing suggests a spontaneous moment."
        }
    ]
}
"#;

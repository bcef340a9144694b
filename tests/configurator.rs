#![allow(clippy::unwrap_used)]

use std::sync::Once;
use std::thread;

use atelier::catalog::Feature;
use atelier::mesh::{PartRole, PrimitiveKind};
use atelier::{
    compute_price, generate_mesh, Archetype, Catalog, Configuration, ConfigurationRecord,
    ConfigurationStore, Dimensions, GenerationParams,
};

static TRACING: Once = Once::new();

fn init_tracing() {
    TRACING.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::from_default_env()
            .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into());
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

const NO_FEATURES: [&str; 0] = [];

fn offered(catalog: &Catalog, archetype: Archetype) -> Vec<Feature> {
    catalog.features_for(archetype).cloned().collect()
}

#[test]
fn standard_configuration_costs_base_price() {
    init_tracing();
    let catalog = Catalog::standard();
    for archetype in Archetype::ALL {
        let std = catalog.standard_dimensions(archetype);
        assert_eq!(
            compute_price(&catalog, archetype, "", NO_FEATURES, std),
            catalog.base_price(archetype),
            "{archetype}"
        );
    }
}

#[test]
fn one_feature_adds_its_surcharge() {
    init_tracing();
    let catalog = Catalog::standard();
    for archetype in Archetype::ALL {
        let std = catalog.standard_dimensions(archetype);
        for material in ["", "Walnut", "Linen", "Unobtainium"] {
            let without = compute_price(&catalog, archetype, material, NO_FEATURES, std);
            for feature in offered(&catalog, archetype) {
                let name = feature.name.as_str();
                let with = compute_price(&catalog, archetype, material, [name], std);
                assert_eq!(with, without + feature.surcharge);
            }
        }
    }
}

#[test]
fn custom_dimensions_add_ten_percent_floored() {
    init_tracing();
    let catalog = Catalog::standard();
    for archetype in Archetype::ALL {
        let std = catalog.standard_dimensions(archetype);
        let feats: Vec<String> = offered(&catalog, archetype)
            .into_iter()
            .take(2)
            .map(|f| f.name)
            .collect();
        let feats: Vec<&str> = feats.iter().map(String::as_str).collect();
        let standard = compute_price(&catalog, archetype, "Oak", feats.iter().copied(), std);
        let variants = [
            Dimensions::new(std.width + 10.0, std.depth, std.height),
            Dimensions::new(std.width, std.depth - 5.0, std.height),
            Dimensions::new(std.width, std.depth, std.height * 1.2),
        ];
        for dims in variants {
            let custom = compute_price(&catalog, archetype, "Oak", feats.iter().copied(), dims);
            assert_eq!(custom, standard * 11 / 10);
            assert!(custom >= catalog.base_price(archetype));
        }
    }
}

#[test]
fn feature_order_and_duplicates_do_not_matter() {
    init_tracing();
    let catalog = Catalog::standard();
    let std = catalog.standard_dimensions(Archetype::Sofa);
    let a = compute_price(
        &catalog,
        Archetype::Sofa,
        "Velvet Blue",
        ["Brass Feet", "USB Charging Port", "Contrast Piping"],
        std,
    );
    let b = compute_price(
        &catalog,
        Archetype::Sofa,
        "Velvet Blue",
        ["Contrast Piping", "Brass Feet", "usb_charger", "Brass Feet", "brass_feet"],
        std,
    );
    assert_eq!(a, b);
    assert_eq!(a, 8950 + 550 + 299 + 349 + 199);
}

#[test]
fn vienna_table_scenarios() {
    init_tracing();
    let catalog = Catalog::standard();
    let std = catalog.standard_dimensions(Archetype::Table);
    assert_eq!(std, Dimensions::new(120.0, 80.0, 45.0));
    assert_eq!(compute_price(&catalog, Archetype::Table, "Walnut", ["Glass Inlay"], std), 6649);
    let wider = Dimensions { width: 130.0, ..std };
    assert_eq!(compute_price(&catalog, Archetype::Table, "Walnut", ["Glass Inlay"], wider), 7313);
}

#[test]
fn unknown_archetype_falls_back() {
    init_tracing();
    let catalog = Catalog::standard();
    let archetype = Archetype::from_id_lenient("Chaise Longue");
    assert_eq!(archetype, Archetype::Generic);
    let std = catalog.standard_dimensions(archetype);
    assert_eq!(compute_price(&catalog, archetype, "", NO_FEATURES, std), 5000);

    let mesh = generate_mesh(&catalog, archetype, std, &GenerationParams::default());
    assert_eq!(mesh.patches.len(), 1);
    assert!(mesh.primitives.is_empty());
    assert!(!mesh.patches[0].is_empty());
    assert_eq!(mesh.patches[0].role, PartRole::Shell);
}

#[test]
fn chair_scenario() {
    init_tracing();
    let catalog = Catalog::standard();
    let mesh = generate_mesh(
        &catalog,
        Archetype::Chair,
        Dimensions::new(55.0, 55.0, 85.0),
        &GenerationParams::default(),
    );
    assert_eq!(mesh.patches_with_role(PartRole::Seat).count(), 1);
    assert_eq!(mesh.patches_with_role(PartRole::Backrest).count(), 1);
    assert_eq!(mesh.patches.len(), 2);
    assert_eq!(mesh.primitives.len(), 4);
    assert!(mesh.primitives.iter().all(|p| p.kind == PrimitiveKind::Lines));
}

#[test]
fn generation_is_deterministic() {
    init_tracing();
    let catalog = Catalog::standard();
    let params = GenerationParams::default().with_resolution(13).unwrap();
    for archetype in Archetype::ALL {
        let dims = Dimensions::new(140.0, 70.0, 90.0);
        let a = generate_mesh(&catalog, archetype, dims, &params);
        let b = generate_mesh(&catalog, archetype, dims, &params);
        let bits = |m: &atelier::Mesh| -> Vec<[u64; 3]> {
            m.points()
                .map(|p| [p.x.to_bits(), p.y.to_bits(), p.z.to_bits()])
                .collect()
        };
        assert_eq!(bits(&a), bits(&b));
        assert_eq!(a, b);
    }
}

#[test]
fn mesh_serializes_for_hand_off() {
    init_tracing();
    let catalog = Catalog::standard();
    let params = GenerationParams::default().with_resolution(4).unwrap();
    let std = catalog.standard_dimensions(Archetype::Table);
    let mesh = generate_mesh(&catalog, Archetype::Table, std, &params);
    let json = serde_json::to_string(&mesh).unwrap();
    assert!(json.contains("\"color_scale\":\"Browns\""));
    let back: atelier::Mesh = serde_json::from_str(&json).unwrap();
    assert_eq!(back.patches.len(), mesh.patches.len());
    assert_eq!(back.primitives.len(), 4);
}

#[test]
fn catalog_is_shared_across_threads() {
    init_tracing();
    let catalog = &Catalog::standard();
    let params = &GenerationParams::default();
    let expected = compute_price(
        catalog,
        Archetype::Bookshelf,
        "Walnut",
        ["Integrated Lighting"],
        Dimensions::new(200.0, 45.0, 240.0),
    );
    thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                s.spawn(move || {
                    let price = compute_price(
                        catalog,
                        Archetype::Bookshelf,
                        "Walnut",
                        ["Integrated Lighting"],
                        Dimensions::new(200.0, 45.0, 240.0),
                    );
                    let mesh = generate_mesh(
                        catalog,
                        Archetype::Bookshelf,
                        Dimensions::new(200.0, 45.0, 240.0),
                        params,
                    );
                    (price, mesh.patches.len())
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), (expected, 8));
        }
    });
    assert_eq!(expected, (11200 + 500 + 899) * 11 / 10);
}

#[test]
fn configure_price_and_save() {
    init_tracing();
    let catalog = Catalog::standard();
    let config = Configuration::standard(&catalog, Archetype::Table)
        .with_material("Walnut")
        .with_feature("Glass Inlay")
        .with_dimensions(Dimensions::new(130.0, 80.0, 45.0));
    assert_eq!(config.price(&catalog), 7313);

    let mut store = ConfigurationStore::new();
    let id = store.save(ConfigurationRecord::capture(&catalog, &config));
    let saved = store.get(id).unwrap();
    assert_eq!(saved.price, 7313);
    assert_eq!(saved.model_id, Archetype::Table);
    assert_eq!(saved.features, vec!["Glass Inlay"]);
}

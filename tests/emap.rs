//! Integration tests over the public enrichment-map API

use enrichment_map::{EmapConfig, EmapError, EnrichmentMap, EnrichmentTable, Item};

fn go_table() -> EnrichmentTable {
    EnrichmentTable::new(vec![
        Item::with_delimited_members("GO:1", "apoptotic process", "TP53/CASP3/BAX/BCL2", 4.0, 0.001),
        Item::with_delimited_members("GO:2", "cell death", "CASP3/BAX/FAS", 3.0, 0.004),
        Item::with_delimited_members("GO:3", "DNA repair", "BRCA1/BRCA2/RAD51", 3.0, 0.010),
        Item::with_delimited_members("GO:4", "DNA recombination", "RAD51/BRCA2", 2.0, 0.030),
        Item::with_delimited_members("GO:5", "ion transport", "KCNQ1", 1.0, 0.200),
    ])
    .unwrap()
}

#[test]
fn builds_two_components_and_a_singleton() {
    let config = EmapConfig {
        min_overlap: 2,
        ..EmapConfig::default()
    };
    let map = EnrichmentMap::build(go_table(), &config).unwrap();

    // GO:1-GO:2 share CASP3/BAX, GO:3-GO:4 share BRCA2/RAD51, GO:5 is alone
    assert_eq!(map.graph.node_count, 5);
    assert_eq!(map.graph.edge_list(), vec![(0, 1, 2), (2, 3, 2)]);
    assert_eq!(map.clusters.len(), 3);

    let representatives = map.cluster_representative();
    assert_eq!(representatives["GO:2"], "GO:1");
    assert_eq!(representatives["GO:4"], "GO:3");
    assert_eq!(representatives["GO:5"], "GO:5");
}

#[test]
fn every_node_survives_any_threshold() {
    for min_overlap in 1..=5 {
        let config = EmapConfig {
            min_overlap,
            ..EmapConfig::default()
        };
        let map = EnrichmentMap::build(go_table(), &config).unwrap();
        assert_eq!(map.graph.node_count, 5);

        let clustered: usize = map.clusters.iter().map(|c| c.size).sum();
        assert_eq!(clustered, 5);
    }
}

#[test]
fn json_records_round_trip_through_the_pipeline() {
    let json = r#"[
        {"ID": "GO:1", "Description": "apoptotic process", "geneID": "TP53/CASP3/BAX", "Count": 3, "p.adjust": 0.001},
        {"ID": "GO:2", "Description": "cell death", "geneID": "CASP3/BAX", "Count": 2, "p.adjust": 0.004},
        {"ID": "GO:3", "Description": "ion transport", "geneID": "KCNQ1", "Count": 1, "p.adjust": 0.2}
    ]"#;
    let table = EnrichmentTable::from_json_records(json).unwrap();

    let config = EmapConfig {
        min_overlap: 2,
        ..EmapConfig::default()
    };
    let map = EnrichmentMap::build(table, &config).unwrap();

    assert_eq!(map.representative_ids(), vec!["GO:1", "GO:3"]);
    assert_eq!(map.minor_ids(), vec!["GO:2"]);
}

#[test]
fn rescaled_sizes_flip_the_representative() {
    // With the inverted rescale the smallest original size becomes the
    // largest rescaled one, so the label moves to the smaller item
    let config = EmapConfig {
        min_overlap: 2,
        rescale_sizes: true,
        ..EmapConfig::default()
    };
    let map = EnrichmentMap::build(go_table(), &config).unwrap();

    let representatives = map.cluster_representative();
    assert_eq!(representatives["GO:1"], "GO:2");
}

#[test]
fn structural_errors_abort_before_construction() {
    let duplicate = EnrichmentTable::new(vec![
        Item::with_delimited_members("GO:1", "a", "g1", 1.0, 0.1),
        Item::with_delimited_members("GO:1", "b", "g2", 2.0, 0.2),
    ]);
    assert!(matches!(duplicate, Err(EmapError::DuplicateId { .. })));

    let config = EmapConfig {
        min_overlap: 0,
        ..EmapConfig::default()
    };
    let result = EnrichmentMap::build(go_table(), &config);
    assert!(matches!(result, Err(EmapError::InvalidMinOverlap { value: 0 })));
}

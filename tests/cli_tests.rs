//! Integration tests for CLI functionality

#[cfg(feature = "cli")]
mod cli_integration_tests {
    use std::fs;
    use tempfile::TempDir;

    use leven_search::cli::commands::execute;
    use leven_search::cli::{load_cost_spec, load_word_list, Commands};
    use leven_search::prelude::*;

    fn write_dict(dir: &TempDir) -> std::path::PathBuf {
        let path = dir.path().join("words.txt");
        fs::write(
            &path,
            "# vocabulary\nPanoramas\n\nmathematician\n  halfway  \npanoramas\n",
        )
        .unwrap();
        path
    }

    #[test]
    fn test_load_word_list_skips_comments_and_blanks() {
        let temp_dir = TempDir::new().unwrap();
        let index = load_word_list(&write_dict(&temp_dir)).unwrap();

        assert_eq!(index.len(), 3);
        assert!(index.find("panoramas"));
        assert!(index.find("halfway"));
        assert!(!index.find("# vocabulary"));
    }

    #[test]
    fn test_load_word_list_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = load_word_list(&temp_dir.path().join("missing.txt")).unwrap_err();
        assert!(err.to_string().contains("Failed to open file"));
    }

    #[test]
    fn test_load_cost_spec_shapes() {
        let temp_dir = TempDir::new().unwrap();

        assert_eq!(load_cost_spec(None).unwrap(), CostSpec::Default);

        let number = temp_dir.path().join("number.json");
        fs::write(&number, "10").unwrap();
        assert_eq!(load_cost_spec(Some(&number)).unwrap(), CostSpec::Uniform(10.0));

        let list = temp_dir.path().join("list.json");
        fs::write(&list, r#"[{"op": "delete", "source": "q", "cost": 2}]"#).unwrap();
        assert_eq!(
            load_cost_spec(Some(&list)).unwrap(),
            CostSpec::List(vec![EditCost::delete('q', 2.0)])
        );

        let object = temp_dir.path().join("object.json");
        fs::write(
            &object,
            r#"{"default_cost": 10, "edit_costs": [{"op": "substitute", "source": "x", "target": "a", "cost": 1}]}"#,
        )
        .unwrap();
        let costs = load_cost_spec(Some(&object)).unwrap().resolve(None);
        assert_eq!(costs.default_cost(), 10.0);
        assert_eq!(costs.cost_of(&Edit::substitute('x', 'a')), 1.0);
    }

    #[test]
    fn test_load_cost_spec_rejects_unknown_shape() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.json");
        fs::write(&path, r#""whatever""#).unwrap();

        let err = load_cost_spec(Some(&path)).unwrap_err();
        assert!(format!("{:#}", err).contains("edit_cost must be a list or EditCost object"));
    }

    #[test]
    fn test_execute_query_and_check() {
        let temp_dir = TempDir::new().unwrap();
        let dict = write_dict(&temp_dir);

        execute(Commands::Query {
            term: "panoramasq".to_string(),
            dict: dict.clone(),
            max_distance: 1.0,
            default_cost: None,
            costs: None,
            limit: Some(5),
            visit_limit: None,
        })
        .unwrap();

        execute(Commands::Check {
            term: "Mathematician".to_string(),
            dict,
        })
        .unwrap();
    }

    #[test]
    fn test_execute_query_rejects_negative_budget() {
        let temp_dir = TempDir::new().unwrap();
        let err = execute(Commands::Query {
            term: "panoramas".to_string(),
            dict: write_dict(&temp_dir),
            max_distance: -1.0,
            default_cost: None,
            costs: None,
            limit: None,
            visit_limit: None,
        })
        .unwrap_err();
        assert!(format!("{:#}", err).contains("Query 'panoramas' failed"));
    }

    #[test]
    fn test_execute_costs_rejects_negative_default() {
        let err = execute(Commands::Costs {
            costs: None,
            default_cost: Some(-1.0),
        })
        .unwrap_err();
        assert!(err.downcast_ref::<SearchError>().is_some());
    }
}

use specnav::resolver::Convention;

fn convention() -> Convention {
    Convention {
        spec_dir: "spec".to_string(),
        spec_suffix: "_spec".to_string(),
        app_dir: "app".to_string(),
    }
}

#[test]
fn source_candidates_are_all_specs() {
    let conv = convention();
    for path in [
        "app/models/user.rb",
        "app/services/payments/charge.rb",
        "lib/tasks/cleanup.rb",
        "config/routes.rb",
    ] {
        assert!(!conv.is_spec(path), "{path} misclassified");
        let candidates = conv.related(path);
        assert!(!candidates.is_empty(), "{path} produced no candidates");
        for candidate in &candidates {
            assert!(conv.is_spec(candidate), "{candidate} is not a spec path");
        }
    }
}

#[test]
fn spec_candidates_are_all_sources() {
    let conv = convention();
    for path in [
        "spec/models/user_spec.rb",
        "spec/lib/tasks/cleanup_spec.rb",
        "spec/views/users/index.html.erb_spec.rb",
    ] {
        assert!(conv.is_spec(path), "{path} misclassified");
        let candidates = conv.related(path);
        assert!(!candidates.is_empty(), "{path} produced no candidates");
        for candidate in &candidates {
            assert!(!conv.is_spec(candidate), "{candidate} is not a source path");
        }
    }
}

#[test]
fn round_trip_returns_to_a_spec_path() {
    let conv = convention();
    for spec in [
        "spec/models/user_spec.rb",
        "spec/lib/tasks/cleanup_spec.rb",
        "spec/controllers/users_controller_spec.rb",
    ] {
        for source in conv.related(spec) {
            let back = conv.related(&source);
            assert!(
                back.iter().any(|p| conv.is_spec(p)),
                "{spec} -> {source} -> {back:?} lost the convention"
            );
            assert!(
                back.contains(&spec.to_string()),
                "{spec} -> {source} -> {back:?} did not return"
            );
        }
    }
}

#[test]
fn conventional_locations_come_first() {
    let conv = convention();
    assert_eq!(
        conv.related("app/models/user.rb"),
        vec!["spec/models/user_spec.rb".to_string()]
    );
    assert_eq!(
        conv.related("spec/models/user_spec.rb"),
        vec![
            "app/models/user.rb".to_string(),
            "models/user.rb".to_string()
        ]
    );
    assert_eq!(
        conv.related("lib/tasks/cleanup.rb"),
        vec!["spec/lib/tasks/cleanup_spec.rb".to_string()]
    );
    assert_eq!(
        conv.related("spec/lib/tasks/cleanup_spec.rb"),
        vec!["lib/tasks/cleanup.rb".to_string()]
    );
}

#[test]
fn view_templates_keep_their_full_name() {
    let conv = convention();
    assert_eq!(
        conv.related("app/views/users/index.html.erb"),
        vec!["spec/views/users/index.html.erb_spec.rb".to_string()]
    );
    assert_eq!(
        conv.related("spec/views/users/index.html.erb_spec.rb")[0],
        "app/views/users/index.html.erb".to_string()
    );
}

#[test]
fn unconventional_input_degrades_without_error() {
    let conv = convention();
    // A bare spec file with no spec root still sheds its suffix.
    assert_eq!(conv.related("user_spec.rb"), vec!["user.rb".to_string()]);
    // A bare source file gets the conventional location.
    assert_eq!(
        conv.related("user.rb"),
        vec!["spec/user_spec.rb".to_string()]
    );
}

#[test]
fn custom_convention_is_honored() {
    let conv = Convention {
        spec_dir: "test".to_string(),
        spec_suffix: "_test".to_string(),
        app_dir: "app".to_string(),
    };
    assert!(conv.is_spec("test/models/user_test.rb"));
    assert!(!conv.is_spec("spec/models/user_spec.rb"));
    assert_eq!(
        conv.related("app/models/user.rb"),
        vec!["test/models/user_test.rb".to_string()]
    );
}

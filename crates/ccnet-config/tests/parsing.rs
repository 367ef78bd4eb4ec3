// crates/ccnet-config/tests/parsing.rs

use ccnet_config::filter::{ActionFilter, CommentFilter, PathFilter, UserFilter};
use ccnet_config::labeller::{
    AssemblyVersionLabeller, DateLabeller, DefaultLabeller, FileLabeller, IterationLabeller,
    LastChangeLabeller, RemoteProjectLabeller, StateFileLabeller,
};
use ccnet_config::source_control::{
    CvsSourceControl, ExternalSourceControl, FileSystemSourceControl, FilteredSourceControl,
    GitSourceControl, MercurialSourceControl, MultiSourceControl, NullSourceControl,
    SurroundSourceControl, SvnSourceControl, VssSourceControl,
};
use ccnet_config::state::FileStateManager;
use ccnet_config::{
    ConfigElement, Filter, FilterGroup, Labeller, NameValuePair, Password, SchemaVersion,
    Settings, SourceControl, StateManager, TimeUnits, Timeout, load_element_from_str,
    load_project_from_str, save_element_to_string, save_project_to_string,
};
use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;

/// Helper function to load a test file from the `tests/data/` directory.
fn load_test_file(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("data");
    path.push(name);

    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read test file {:?}: {}", path, e))
}

fn init_logging() {
    env_logger::try_init().ok(); // Ignore error if already initialized
}

/// Saves `element` with `settings` and loads the result again.
fn round_trip(element: ConfigElement, settings: &Settings) -> ConfigElement {
    let xml = save_element_to_string(&element, settings)
        .unwrap_or_else(|e| panic!("Failed to save {}: {}", element.type_name(), e));
    load_element_from_str(&xml)
        .unwrap_or_else(|e| panic!("Failed to reload {}: {}\n{}", element.type_name(), e, xml))
}

fn timeout() -> Timeout {
    Timeout::new(90, TimeUnits::Seconds)
}

/// One instance of every element with every property set. Properties that
/// the newest schema no longer accepts (`cvs/useHistory`) are left unset.
fn fully_populated() -> Vec<ConfigElement> {
    let mut elements: Vec<ConfigElement> = Vec::new();

    // --- Labellers ---
    elements.push(
        Labeller::Default(DefaultLabeller {
            prefix: Some("Foo-1-".into()),
            increment_on_failure: Some(true),
            label_format: Some("000".into()),
            initial_build_label: Some(42),
        })
        .into(),
    );
    elements.push(
        Labeller::Date(DateLabeller {
            year_format: Some("0000".into()),
            month_format: Some("00".into()),
            day_format: Some("00".into()),
            revision_format: Some("000".into()),
        })
        .into(),
    );
    let mut iteration = IterationLabeller::new(NaiveDate::from_ymd_opt(2023, 11, 6).unwrap());
    iteration.prefix = Some("Sprint".into());
    iteration.duration = Some(2);
    iteration.separator = Some("_".into());
    iteration.increment_on_failure = Some(false);
    elements.push(Labeller::Iteration(iteration).into());
    elements.push(
        Labeller::AssemblyVersion(AssemblyVersionLabeller {
            major: Some(2),
            minor: Some(1),
            build: Some(-1),
            revision: Some(7),
            increment_on_failure: Some(true),
        })
        .into(),
    );
    elements.push(
        Labeller::LastChange(LastChangeLabeller {
            prefix: Some("r".into()),
            increment_on_failure: Some(false),
            allow_duplicate_subsequent_labels: Some(true),
        })
        .into(),
    );
    let mut file = FileLabeller::new(r"C:\labels\next.txt").unwrap();
    file.prefix = Some("L".into());
    file.allow_duplicate_subsequent_labels = Some(false);
    elements.push(Labeller::File(file).into());
    elements.push(Labeller::StateFile(StateFileLabeller::new("Core").unwrap()).into());
    let mut remote = RemoteProjectLabeller::new("Core").unwrap();
    remote.server_uri = Some("tcp://build01:21234/CruiseManager.rem".into());
    elements.push(Labeller::RemoteProject(remote).into());

    // --- Source control ---
    let mut svn = SvnSourceControl::new("svn://svn.example.org/app/trunk").unwrap();
    svn.executable = Some("svn.exe".into());
    svn.working_directory = Some(r"C:\work\app".into());
    svn.username = Some("builder".into());
    svn.password = Some(Password::new("p<a>ss&word"));
    svn.tag_on_success = Some(true);
    svn.tag_base_url = Some("svn://svn.example.org/app/tags".into());
    svn.auto_get_source = Some(true);
    svn.clean_copy = Some(false);
    svn.revert = Some(true);
    svn.clean_up = Some(true);
    svn.check_externals = Some(false);
    svn.timeout = Some(timeout());
    elements.push(SourceControl::Svn(svn.clone()).into());

    let mut git = GitSourceControl::new("git@example.org:app.git").unwrap();
    git.branch = Some("main".into());
    git.executable = Some("git".into());
    git.working_directory = Some("/srv/app".into());
    git.auto_get_source = Some(true);
    git.tag_on_success = Some(true);
    git.commit_build_modifications = Some(false);
    git.commit_untracked_files = Some(false);
    git.tag_commit_message = Some("CCNet build {0}".into());
    git.tag_name_format = Some("v{0}".into());
    git.committer_name = Some("CruiseControl.NET".into());
    git.committer_email = Some("ccnet@example.org".into());
    git.fetch_submodules = Some(true);
    git.timeout = Some(timeout());
    elements.push(SourceControl::Git(git.clone()).into());

    let mut cvs = CvsSourceControl::new(":pserver:anon@cvs.example.org:/cvsroot", "app").unwrap();
    cvs.executable = Some("cvs.exe".into());
    cvs.working_directory = Some(r"C:\work\cvs".into());
    cvs.branch = Some("RELEASE_1".into());
    cvs.auto_get_source = Some(true);
    cvs.label_on_success = Some(true);
    cvs.tag_prefix = Some("build-".into());
    cvs.clean_copy = Some(true);
    cvs.force_checkout = Some(false);
    cvs.suppress_revision_header = Some(true);
    cvs.restrict_logins = Some("alice,bob".into());
    cvs.timeout = Some(timeout());
    elements.push(SourceControl::Cvs(cvs).into());

    let mut hg = MercurialSourceControl::new("https://hg.example.org/app").unwrap();
    hg.branch = Some("stable".into());
    hg.executable = Some("hg".into());
    hg.working_directory = Some("/srv/hg".into());
    hg.auto_get_source = Some(true);
    hg.tag_on_success = Some(true);
    hg.tag_commit_message = Some("Tagging {0}".into());
    hg.commit_modifications = Some(false);
    hg.commit_untracked = Some(false);
    hg.committer_name = Some("ccnet".into());
    hg.purge_modifications = Some(true);
    hg.revert_modifications = Some(true);
    hg.timeout = Some(timeout());
    elements.push(SourceControl::Mercurial(hg).into());

    let mut fs = FileSystemSourceControl::new(r"\\share\drop").unwrap();
    fs.auto_get_source = Some(true);
    fs.ignore_missing_root = Some(true);
    elements.push(SourceControl::FileSystem(fs.clone()).into());

    elements.push(
        SourceControl::Null(NullSourceControl {
            fail_get_modifications: Some(true),
            fail_label_source_control: Some(false),
            fail_get_source: Some(true),
        })
        .into(),
    );

    elements.push(
        SourceControl::Surround(SurroundSourceControl {
            executable: Some("sscm.exe".into()),
            server_connect: Some("scm.example.org:4900".into()),
            server_login: Some("builder:secret".into()),
            branch: Some("Mainline".into()),
            repository: Some("Mainline/App".into()),
            file: Some("*.cs".into()),
            working_directory: Some(r"C:\work\surround".into()),
            recursive: Some(true),
            search_regexp: Some(false),
            timeout: Some(timeout()),
        })
        .into(),
    );

    let mut vss = VssSourceControl::new("$/App/Main").unwrap();
    vss.executable = Some(r"C:\VSS\win32\ss.exe".into());
    vss.username = Some("builder".into());
    vss.password = Some(Password::new("vss-pw"));
    vss.ssdir = Some(r"\\vss\data".into());
    vss.working_directory = Some(r"C:\work\vss".into());
    vss.culture = Some("en-US".into());
    vss.apply_label = Some(true);
    vss.auto_get_source = Some(true);
    vss.always_get_latest = Some(false);
    vss.clean_copy = Some(true);
    vss.timeout = Some(timeout());
    elements.push(SourceControl::Vss(vss).into());

    let mut external = ExternalSourceControl::new("fetch.cmd").unwrap();
    external.args = Some("--verbose".into());
    external.auto_get_source = Some(true);
    external.label_on_success = Some(false);
    external.environment = vec![
        NameValuePair::new("ROOT", r"C:\src"),
        NameValuePair::new("EMPTY", ""),
    ];
    elements.push(SourceControl::External(external).into());

    elements.push(
        SourceControl::Multi(MultiSourceControl {
            require_changes_from_all: Some(true),
            source_controls: vec![SourceControl::Svn(svn), SourceControl::FileSystem(fs)],
        })
        .into(),
    );

    let mut filtered = FilteredSourceControl::new(SourceControl::Git(git));
    filtered.inclusion_filters = FilterGroup {
        filters: vec![
            Filter::Path(PathFilter {
                pattern: "/src/**/*.*".into(),
                case_sensitive: Some(true),
            }),
            Filter::Action(ActionFilter {
                actions: vec!["added".into(), "modified".into()],
            }),
        ],
    };
    filtered.exclusion_filters = FilterGroup {
        filters: vec![
            Filter::User(UserFilter {
                names: vec!["ccnet".into()],
            }),
            Filter::Comment(CommentFilter {
                pattern: "^Merge".into(),
                case_sensitive: Some(false),
            }),
        ],
    };
    elements.push(SourceControl::Filtered(filtered).into());

    // --- State ---
    elements.push(
        StateManager::File(FileStateManager {
            directory: Some(r"C:\ccnet\state".into()),
        })
        .into(),
    );

    // --- A filter on its own ---
    elements.push(
        Filter::User(UserFilter {
            names: vec!["alice".into(), "bob".into()],
        })
        .into(),
    );

    elements
}

/// Every element with only its required properties set.
fn minimally_populated() -> Vec<ConfigElement> {
    let release = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
    vec![
        Labeller::Default(DefaultLabeller::default()).into(),
        Labeller::Date(DateLabeller::default()).into(),
        Labeller::Iteration(IterationLabeller::new(release)).into(),
        Labeller::AssemblyVersion(AssemblyVersionLabeller::default()).into(),
        Labeller::LastChange(LastChangeLabeller::default()).into(),
        Labeller::File(FileLabeller::new("label.txt").unwrap()).into(),
        Labeller::StateFile(StateFileLabeller::new("Core").unwrap()).into(),
        Labeller::RemoteProject(RemoteProjectLabeller::new("Core").unwrap()).into(),
        SourceControl::Svn(SvnSourceControl::new("svn://a").unwrap()).into(),
        SourceControl::Git(GitSourceControl::new("git://a").unwrap()).into(),
        SourceControl::Cvs(CvsSourceControl::new(":local:/cvs", "m").unwrap()).into(),
        SourceControl::Mercurial(MercurialSourceControl::new("http://a").unwrap()).into(),
        SourceControl::FileSystem(FileSystemSourceControl::new("/drop").unwrap()).into(),
        SourceControl::Null(NullSourceControl::default()).into(),
        SourceControl::Surround(SurroundSourceControl::default()).into(),
        SourceControl::Vss(VssSourceControl::new("$/").unwrap()).into(),
        SourceControl::External(ExternalSourceControl::new("x.cmd").unwrap()).into(),
        SourceControl::Multi(MultiSourceControl::default()).into(),
        SourceControl::Filtered(FilteredSourceControl::new(SourceControl::Null(
            NullSourceControl::default(),
        )))
        .into(),
        StateManager::File(FileStateManager::default()).into(),
        Filter::Path(PathFilter {
            pattern: "*".into(),
            case_sensitive: None,
        })
        .into(),
    ]
}

/// Loads the sample project and checks that every block was read.
#[test]
fn test_load_project_fixture() {
    init_logging();
    let project = load_project_from_str(&load_test_file("project.xml"))
        .expect("Failed to parse project.xml");

    assert_eq!(project.name(), "Kernel");

    // 1. Source control: filtered -> multi -> (svn, external)
    let Some(SourceControl::Filtered(filtered)) = &project.source_control else {
        panic!("Expected a filtered source control, got {:?}", project.source_control);
    };
    let Some(SourceControl::Multi(multi)) = filtered.provider() else {
        panic!("Expected a multi provider, got {:?}", filtered.provider());
    };
    assert_eq!(multi.require_changes_from_all, Some(false));
    assert_eq!(multi.source_controls.len(), 2);

    let SourceControl::Svn(svn) = &multi.source_controls[0] else {
        panic!("Expected svn first");
    };
    assert_eq!(svn.trunk_url(), "svn://svn.example.org/kernel/trunk");
    assert_eq!(svn.password.as_ref().map(Password::expose), Some("s3cr&t"));
    assert_eq!(svn.auto_get_source, Some(true));
    assert_eq!(svn.timeout, Some(Timeout::new(10, TimeUnits::Minutes)));

    let SourceControl::External(external) = &multi.source_controls[1] else {
        panic!("Expected external second");
    };
    assert_eq!(
        external.environment,
        vec![
            NameValuePair::new("ASSET_ROOT", r"\\share\assets"),
            NameValuePair::new("MODE", "full"),
        ]
    );

    // 2. Filters
    assert_eq!(filtered.inclusion_filters.filters.len(), 1);
    assert_eq!(filtered.exclusion_filters.filters.len(), 3);
    assert_eq!(
        filtered.exclusion_filters.filters[2],
        Filter::Comment(CommentFilter {
            pattern: r"^\[skip ci\]".into(),
            case_sensitive: Some(true),
        })
    );

    // 3. Labeller and state
    let Some(Labeller::Iteration(iteration)) = &project.labeller else {
        panic!("Expected an iteration labeller, got {:?}", project.labeller);
    };
    assert_eq!(
        iteration.release_start_date(),
        NaiveDate::from_ymd_opt(2024, 1, 15)
    );
    assert_eq!(iteration.duration, Some(3));
    assert_eq!(iteration.separator.as_deref(), Some("-"));
    assert_eq!(
        project.state,
        Some(StateManager::File(FileStateManager {
            directory: Some(r"C:\ccnet\state".into())
        }))
    );
}

/// 1. Load the sample project
/// 2. Save it for the newest schema
/// 3. Load the saved string
/// 4. Assert the two models are identical.
#[test]
fn test_round_trip_project_fixture() {
    init_logging();
    let project1 = load_project_from_str(&load_test_file("project.xml")).unwrap();

    let xml = save_project_to_string(&project1, &Settings::default())
        .expect("Failed to serialize project");
    let project2 = load_project_from_str(&xml).expect("Failed to parse saved project");

    assert_eq!(project1.source_control, project2.source_control, "Source control mismatch");
    assert_eq!(project1.labeller, project2.labeller, "Labeller mismatch");
    assert_eq!(project1, project2);

    // Children the model does not cover are not written back.
    assert!(!xml.contains("<tasks"));
    assert!(!xml.contains("workingDirectory>C:\\builds"));
}

/// Saving for an older schema drops the newer properties; reading the result
/// back shows them as unset.
#[test]
fn test_round_trip_project_fixture_for_1_4_4() {
    init_logging();
    let project1 = load_project_from_str(&load_test_file("project.xml")).unwrap();
    let settings = Settings::with_target_version(SchemaVersion::V1_4_4);

    let xml = save_project_to_string(&project1, &settings).unwrap();
    let project2 = load_project_from_str(&xml).unwrap();

    assert_ne!(project1, project2);
    let Some(SourceControl::Filtered(filtered)) = &project2.source_control else {
        panic!("Expected a filtered source control");
    };
    // pathFilter/caseSensitive starts at 1.5; commentFilter/caseSensitive has no gate.
    assert_eq!(
        filtered.inclusion_filters.filters[0],
        Filter::Path(PathFilter {
            pattern: "/kernel/**/*.cs".into(),
            case_sensitive: None,
        })
    );
    let Filter::Comment(comment) = &filtered.exclusion_filters.filters[2] else {
        panic!("Expected a comment filter");
    };
    assert_eq!(comment.case_sensitive, Some(true));

    // Pre-1.5 documents use the compact environment form.
    assert!(xml.contains("<var>MODE=full</var>"));
}

#[test]
fn test_round_trip_every_element_fully_populated() {
    init_logging();
    let settings = Settings::default();
    for element in fully_populated() {
        let reloaded = round_trip(element.clone(), &settings);
        assert_eq!(element, reloaded, "Round trip changed {}", element.type_name());
    }
}

#[test]
fn test_round_trip_every_element_minimally_populated() {
    init_logging();
    for version in [SchemaVersion::V1_3, SchemaVersion::V1_5, SchemaVersion::LATEST] {
        let settings = Settings::with_target_version(version);
        for element in minimally_populated() {
            let reloaded = round_trip(element.clone(), &settings);
            assert_eq!(
                element,
                reloaded,
                "Round trip changed {} at {}",
                element.type_name(),
                version
            );
        }
    }
}

/// The fully populated elements cover every registered discriminator.
#[test]
fn test_every_type_is_covered() {
    use ccnet_config::{Category, supported_types};

    let elements = fully_populated();
    for category in [Category::SourceControl, Category::Labeller, Category::State] {
        for type_name in supported_types(category) {
            assert!(
                elements
                    .iter()
                    .any(|e| e.category() == category && e.type_name() == type_name),
                "No sample for {} '{}'",
                category,
                type_name
            );
        }
    }
}

/// Cloning is deep: editing the copy's nested provider leaves the original alone.
#[test]
fn test_clone_is_deep() {
    let original = fully_populated()
        .into_iter()
        .find_map(|e| match e {
            ConfigElement::SourceControl(SourceControl::Filtered(f)) => Some(f),
            _ => None,
        })
        .unwrap();

    let mut copy = original.clone();
    assert_eq!(copy, original);

    let mut git = GitSourceControl::new("git@example.org:fork.git").unwrap();
    git.branch = Some("feature".into());
    copy.set_provider(SourceControl::Git(git));
    copy.exclusion_filters.filters.clear();

    assert_ne!(copy, original);
    let Some(SourceControl::Git(git)) = original.provider() else {
        panic!("Original provider changed type");
    };
    assert_eq!(git.repository(), "git@example.org:app.git");
    assert_eq!(original.exclusion_filters.filters.len(), 2);
}

#[test]
fn test_output_layout_follows_settings() {
    let labeller: ConfigElement = Labeller::Default(DefaultLabeller {
        prefix: Some("Foo-1-".into()),
        ..Default::default()
    })
    .into();

    let compact = Settings {
        indent: 0,
        declaration: false,
        ..Settings::default()
    };
    assert_eq!(
        save_element_to_string(&labeller, &compact).unwrap(),
        r#"<labeller type="defaultlabeller"><prefix>Foo-1-</prefix></labeller>"#
    );

    let pretty = save_element_to_string(&labeller, &Settings::default()).unwrap();
    assert!(pretty.starts_with(r#"<?xml version="1.0" encoding="utf-8"?>"#));
    assert!(pretty.contains("\n  <prefix>Foo-1-</prefix>"));
}

#[test]
fn test_settings_document_drives_output() {
    let settings =
        Settings::from_xml_str(r#"<settings targetVersion="1.3" indent="0" declaration="false"/>"#)
            .unwrap();
    let labeller: ConfigElement = Labeller::Default(DefaultLabeller {
        prefix: Some("P".into()),
        label_format: Some("000".into()),
        ..Default::default()
    })
    .into();

    // labelFormat starts at 1.4.
    assert_eq!(
        save_element_to_string(&labeller, &settings).unwrap(),
        r#"<labeller type="defaultlabeller"><prefix>P</prefix></labeller>"#
    );
}

/// Leading and trailing spaces are part of a value.
#[test]
fn test_round_trip_keeps_edge_whitespace() {
    let mut iteration = IterationLabeller::new(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    iteration.prefix = Some("Build ".into());
    iteration.separator = Some(" - ".into());
    let labeller: ConfigElement = Labeller::Iteration(iteration).into();

    let mut external = ExternalSourceControl::new("fetch.cmd").unwrap();
    external.args = Some(" --all".into());
    external.environment.push(NameValuePair::new("SEP", " "));
    let external: ConfigElement = SourceControl::External(external).into();

    for version in [SchemaVersion::V1_4_4, SchemaVersion::LATEST] {
        for settings in [
            Settings::with_target_version(version),
            Settings {
                indent: 0,
                ..Settings::with_target_version(version)
            },
        ] {
            assert_eq!(round_trip(labeller.clone(), &settings), labeller);
            assert_eq!(round_trip(external.clone(), &settings), external);
        }
    }
}

use std::fs;
use std::path::{Path, PathBuf};

use pomless_core::{ModelReader, ReaderConfig, ReaderOptions};
use tempfile::TempDir;
use tracing_subscriber::EnvFilter;

pub const PARENT_POM: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<project xmlns="http://maven.apache.org/POM/4.0.0">
  <modelVersion>4.0.0</modelVersion>
  <groupId>testParent.groupId</groupId>
  <artifactId>testparent</artifactId>
  <version>0.0.1-SNAPSHOT</version>
  <packaging>pom</packaging>
</project>
"#;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()))
        .with_test_writer()
        .try_init();
}

/// A workspace tree on disk. The root is the reader's project root.
pub struct Workspace {
    dir: TempDir,
}

#[allow(dead_code)]
impl Workspace {
    pub fn new() -> Self {
        init_tracing();
        Self {
            dir: tempfile::tempdir().expect("create workspace"),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path(relative);
        fs::create_dir_all(path.parent().expect("parent dir")).expect("create dirs");
        fs::write(&path, content).expect("write file");
        path
    }

    pub fn mkdir(&self, relative: &str) -> PathBuf {
        let path = self.path(relative);
        fs::create_dir_all(&path).expect("create dir");
        path
    }

    /// Marker file for the module at `relative`.
    pub fn marker(&self, relative: &str) -> PathBuf {
        self.write(&format!("{relative}/build.properties"), "bin.includes = META-INF/,\\\n               .\n")
    }

    pub fn bundle(&self, relative: &str, manifest: &str) -> PathBuf {
        self.write(&format!("{relative}/META-INF/MANIFEST.MF"), manifest);
        self.marker(relative)
    }

    pub fn feature(&self, relative: &str, feature_xml: &str) -> PathBuf {
        self.write(&format!("{relative}/feature.xml"), feature_xml);
        self.marker(relative)
    }

    pub fn site(&self, relative: &str, category_xml: &str) -> PathBuf {
        self.write(&format!("{relative}/category.xml"), category_xml);
        self.marker(relative)
    }

    pub fn reader(&self) -> ModelReader {
        ModelReader::new(ReaderConfig::default().with_project_root(Some(self.root().to_path_buf())))
    }
}

pub fn options(marker: &Path) -> ReaderOptions {
    ReaderOptions::from_source(marker)
}

/// The layout the reader is exercised against: a parent pom with a bundle,
/// a test bundle, a feature and a site below it.
#[allow(dead_code)]
pub fn pomless_workspace() -> Workspace {
    let ws = Workspace::new();
    ws.write("testpomless/pom.xml", PARENT_POM);
    ws.bundle(
        "testpomless/bundle1",
        "Manifest-Version: 1.0\nBundle-ManifestVersion: 2\nBundle-Name: Pomless Bundle\nBundle-SymbolicName: pomless.bundle;singleton:=true\nBundle-Version: 0.1.0.qualifier\n",
    );
    ws.bundle(
        "testpomless/bundle1.tests",
        "Manifest-Version: 1.0\r\nBundle-SymbolicName: pomless.bundle.tests\r\nBundle-Version: 1.0.1\r\nFragment-Host: pomless.bundle\r\n",
    );
    ws.feature(
        "testpomless/feature",
        r#"<?xml version="1.0" encoding="UTF-8"?>
<feature id="pomless.feature" label="Pomless Feature" version="1.0.0.qualifier">
   <plugin id="pomless.bundle" version="0.0.0" unpack="false"/>
</feature>
"#,
    );
    ws.site(
        "testpomless/site",
        r#"<?xml version="1.0" encoding="UTF-8"?>
<site id="pomless.site" version="1.0.0.qualifier">
   <feature id="pomless.feature" version="0.0.0"/>
</site>
"#,
    );
    ws
}

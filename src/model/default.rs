//! Canonical default dataset.
//!
//! Twelve lifecycle stages forming one cycle, the forward connections plus a
//! few alternative feedback edges, and the tool exemplars for each stage.
//! Synthesized when no dataset document exists on disk (see `loader`).

use super::{Connection, ConnectionKind, Exemplar, LifecycleData, Stage};

fn stage(name: &str, description: &str, color: &str) -> Stage {
    Stage {
        name: name.into(),
        description: description.into(),
        color: color.into(),
    }
}

fn conn(from: &str, to: &str, kind: ConnectionKind) -> Connection {
    Connection {
        from: from.into(),
        to: to.into(),
        kind,
    }
}

fn tool(stage: &str, category: &str, name: &str, description: &str) -> Exemplar {
    Exemplar {
        stage: stage.into(),
        category: category.into(),
        name: name.into(),
        description: description.into(),
    }
}

/// Build the canonical lifecycle dataset.
pub fn default_data() -> LifecycleData {
    use ConnectionKind::{Alternative, Normal};

    let stages = vec![
        stage(
            "Conceptualise",
            "To formulate the initial research idea or hypothesis, and define the scope of the research project and the data component/requirements of that project.",
            "#90be33",
        ),
        stage(
            "Plan",
            "To establish a structured strategic framework for management of the research project, outlining aims, objectives, methodologies, and resources required for data collection, management and analysis. Data management plans (DMP) should be established for this phase of the lifecycle.",
            "#90be44",
        ),
        stage(
            "Fund",
            "To identify and acquire financial resources to support the research project, including data collection, management, analysis, sharing, publishing and preservation.",
            "#90be55",
        ),
        stage(
            "Collect",
            "To use predefined procedures, methodologies and instruments to acquire and store data that is reliable, fit for purpose and of sufficient quality to test the research hypothesis.",
            "#90be66",
        ),
        stage(
            "Process",
            "To make new and existing data analysis-ready. This may involve standardised pre-processing, cleaning, reformatting, structuring, filtering, and performing quality control checks on data.",
            "#90be79",
        ),
        stage(
            "Analyse",
            "To derive insights, knowledge, and understanding from processed data. Data analysis involves iterative exploration and interpretation of experimental or computational results.",
            "#90be83",
        ),
        stage(
            "Store",
            "To record data using technological media appropriate for processing and analysis whilst maintaining data integrity and security.",
            "#90be9a",
        ),
        stage(
            "Publish",
            "To release research data in published form for use by others with appropriate metadata for citation (including a unique persistent identifier) based on FAIR principles.",
            "#90beaa",
        ),
        stage(
            "Preserve",
            "To ensure the safety, integrity, and accessibility of data for as long as necessary so that data is as FAIR as possible.",
            "#90bebb",
        ),
        stage(
            "Share",
            "To make data available and accessible to humans and/or machines. Data may be shared with project collaborators or published to share it with the wider research community and society at large.",
            "#90becc",
        ),
        stage(
            "Access",
            "To control and manage data access by designated users and reusers. This may be in the form of publicly available published information. Necessary access control and authentication methods are applied.",
            "#90bedd",
        ),
        stage(
            "Transform",
            "To create new data from the original, for example: (i) by migration into a different format; (ii) by creating a subset, by selection or query, to create newly derived results, perhaps for publication; or, (iii) combining or appending with other data.",
            "#90beee",
        ),
    ];

    let connections = vec![
        conn("Conceptualise", "Plan", Normal),
        conn("Plan", "Fund", Normal),
        conn("Fund", "Collect", Normal),
        conn("Collect", "Process", Normal),
        conn("Process", "Analyse", Normal),
        conn("Analyse", "Store", Normal),
        conn("Store", "Publish", Normal),
        conn("Publish", "Preserve", Normal),
        conn("Preserve", "Share", Normal),
        conn("Share", "Access", Normal),
        conn("Access", "Transform", Normal),
        conn("Transform", "Conceptualise", Normal),
        conn("Analyse", "Collect", Alternative),
        conn("Store", "Analyse", Alternative),
        conn("Process", "Collect", Alternative),
    ];

    let exemplars = vec![
        tool("Conceptualise", "Mind mapping", "Miro", "Collaborative online whiteboard platform for cross-functional team collaboration"),
        tool("Conceptualise", "Mind mapping", "MindMeister", "Online mind mapping software for brainstorming and idea management"),
        tool("Conceptualise", "Mind mapping", "XMind", "Full-featured mind mapping and brainstorming tool"),
        tool("Conceptualise", "Diagramming", "Lucidchart", "Web-based diagramming application for creating flowcharts, org charts, and more"),
        tool("Conceptualise", "Diagramming", "Draw.io", "Free online diagram software for making flowcharts, process diagrams, etc."),
        tool("Conceptualise", "Wireframing", "Balsamiq", "Rapid wireframing tool that helps you create mockups quickly"),
        tool("Plan", "Data Management Planning", "DMPTool", "Tool for creating data management plans that meet institutional and funder requirements"),
        tool("Plan", "Data Management Planning", "DMPonline", "Web-based tool to create, share, and export data management plans"),
        tool("Plan", "Project Planning", "Trello", "Web-based Kanban-style list-making application for project management"),
        tool("Plan", "Project Planning", "Asana", "Web-based project management tool that helps teams organize and track their work"),
        tool("Plan", "Project Planning", "Microsoft Project", "Project management software for project scheduling and resource allocation"),
        tool("Plan", "Combined DMP/Project", "Data Stewardship Wizard", "Tool that combines project planning with data management plan creation"),
        tool("Fund", "Funding Information", "ResearchProfessional", "Comprehensive database of research funding opportunities"),
        tool("Fund", "Funding Information", "Pivot", "Database for discovering funding opportunities and research collaborators"),
        tool("Collect", "Quantitative Data", "Open Data Kit", "Open-source tool for mobile data collection"),
        tool("Collect", "Quantitative Data", "GBIF", "Global Biodiversity Information Facility for biodiversity data collection"),
        tool("Collect", "Qualitative Data", "SurveyMonkey", "Cloud-based survey tool for creating, distributing, and analyzing surveys"),
        tool("Collect", "Qualitative Data", "Zooniverse", "Platform for people-powered research through citizen science"),
        tool("Collect", "Harvesting", "DROID", "Tool for file format identification"),
        tool("Process", "Electronic Lab Notebooks", "RSpace", "Electronic lab notebook software for researchers"),
        tool("Process", "Electronic Lab Notebooks", "eLabNext", "Digital lab notebook for organizing research data"),
        tool("Process", "Scientific Computing", "Jupyter", "Web application for creating and sharing documents with live code, equations, and visualizations"),
        tool("Process", "Metadata Tools", "CEDAR Workbench", "Tool for metadata creation and management in biomedical research"),
        tool("Analyse", "Statistical Software", "SPSS", "Software package for statistical analysis"),
        tool("Analyse", "Statistical Software", "Matlab", "Multi-paradigm numerical computing environment and programming language"),
        tool("Analyse", "Computational Tools", "RStudio", "Integrated development environment for R, a programming language for statistical computing"),
        tool("Analyse", "Computational Tools", "Eclipse", "Integrated development environment used in computer programming"),
        tool("Store", "Data Repository", "Figshare", "Repository where users can make all of their research outputs available in a citable, shareable and discoverable manner"),
        tool("Store", "Data Repository", "Zenodo", "General-purpose open-access repository for research data"),
        tool("Store", "Data Repository", "Dataverse", "Open source web application to share, preserve, cite, explore, and analyze research data"),
        tool("Store", "Management Tools", "iRODS", "Integrated Rule-Oriented Data System for data management"),
        tool("Publish", "Discipline Repository", "NOMAD-OASIS", "Repository for materials science data"),
        tool("Publish", "Generalist Repository", "Figshare", "Repository for research outputs including figures, datasets, media, papers, posters, presentations and filesets"),
        tool("Publish", "Generalist Repository", "Zenodo", "General-purpose open-access repository"),
        tool("Publish", "Metadata Repository", "DataCite Commons", "Repository for storing and sharing metadata"),
        tool("Preserve", "Data Repository", "Dataverse", "Repository software for research data preservation"),
        tool("Preserve", "Archive", "Archivematica", "Digital preservation system designed to maintain long-term access to digital content"),
        tool("Preserve", "Containers", "Docker", "Platform for developing, shipping, and running applications in containers"),
        tool("Share", "Data Repository", "Figshare", "Repository for sharing research data and other outputs"),
        tool("Share", "Data Repository", "Zenodo", "Repository for sharing research data outputs"),
        tool("Share", "Electronic Lab Notebooks", "RSpace", "Platform for sharing lab research data"),
        tool("Access", "Data Repository", "CKAN", "Open-source data management system for powering data hubs and data portals"),
        tool("Access", "Database", "PostgreSQL", "Open-source relational database system"),
        tool("Access", "Database", "MySQL", "Open-source relational database management system"),
        tool("Access", "Authentication", "LDAP", "Lightweight Directory Access Protocol for accessing directories"),
        tool("Access", "Authentication", "SAML", "Security Assertion Markup Language for exchanging authentication data"),
        tool("Transform", "Programming Languages", "Python", "Interpreted high-level programming language for general-purpose programming"),
        tool("Transform", "Programming Languages", "Perl", "Family of programming languages for text processing"),
        tool("Transform", "ETL Tools", "Apache Spark", "Unified analytics engine for large-scale data processing"),
        tool("Transform", "ETL Tools", "Snowflake", "Cloud-based data warehousing platform"),
    ];

    LifecycleData {
        stages,
        connections,
        exemplars,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_twelve_stages_in_cycle_order() {
        let data = default_data();
        assert_eq!(data.stages.len(), 12);
        assert_eq!(data.stages[0].name, "Conceptualise");
        assert_eq!(data.stages[11].name, "Transform");
    }

    #[test]
    fn test_default_references_resolve() {
        let data = default_data();
        for c in &data.connections {
            assert!(data.has_stage(&c.from), "dangling from: {}", c.from);
            assert!(data.has_stage(&c.to), "dangling to: {}", c.to);
        }
        for e in &data.exemplars {
            assert!(data.has_stage(&e.stage), "dangling stage: {}", e.stage);
        }
    }

    #[test]
    fn test_default_counts() {
        let data = default_data();
        assert_eq!(data.connections.len(), 15);
        assert!(data.exemplars.len() >= 50);
        let normal = data
            .connections
            .iter()
            .filter(|c| c.kind == ConnectionKind::Normal)
            .count();
        assert_eq!(normal, 12);
    }
}

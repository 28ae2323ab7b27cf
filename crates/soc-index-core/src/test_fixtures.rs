//! A small, realistic slice of SOC 2020 shared by the unit tests.

use crate::models::{IndexRow, StructureRow};

pub(crate) fn group_row(code: &str, title: &str, description: &str) -> StructureRow {
    let mut row = StructureRow {
        group_title: Some(title.to_string()),
        group_description: Some(description.to_string()),
        ..Default::default()
    };
    let digits = code.len();
    let code = Some(code.to_string());
    match digits {
        1 => row.major_group = code,
        2 => row.sub_major_group = code,
        3 => row.minor_group = code,
        _ => row.unit_group = code,
    }
    row
}

pub(crate) fn unit_row(
    code: &str,
    title: &str,
    description: &str,
    qualifications: &str,
    tasks: &str,
) -> StructureRow {
    StructureRow {
        unit_group: Some(code.to_string()),
        group_title: Some(title.to_string()),
        group_description: Some(description.to_string()),
        qualifications: Some(qualifications.to_string()),
        tasks: Some(tasks.to_string()),
        ..Default::default()
    }
}

pub(crate) fn structure_rows() -> Vec<StructureRow> {
    vec![
        group_row(
            "1",
            "Managers, directors and senior officials",
            "This major group covers occupations whose tasks consist of planning, directing and coordinating resources.",
        ),
        group_row("11", "Corporate managers and directors", "Corporate managers and directors plan and direct organisations."),
        group_row("111", "Chief executives and senior officials", "Chief executives head large enterprises and organisations."),
        unit_row(
            "1111",
            "Chief executives and senior officials",
            "Chief executives and senior officials formulate government policy or direct organisations.",
            "There are no formal academic entry requirements.",
            "Tasks:\n~determines the aims of the organisation\n~ directs and coordinates the work of senior staff",
        ),
        unit_row(
            "1112",
            "Elected officers and representatives",
            "Elected officers and representatives serve as members of legislative bodies.",
            "Candidates must be elected.",
            "Tasks:\n~represents the interests of constituents\n~attends sittings of parliament",
        ),
        group_row(
            "2",
            "Professional occupations",
            "This major group covers occupations whose main tasks require a high level of knowledge and experience.",
        ),
        group_row("21", "Science, research, engineering and technology professionals", "Science professionals conduct research."),
        group_row("211", "Natural and social science professionals", "Natural and social science professionals study the physical world."),
        unit_row(
            "2111",
            "Chemical scientists",
            "Chemical scientists study the chemical structure of substances.",
            "Entrants usually possess a degree.",
            "Tasks:\n~conducts research into the chemical structure of substances\n~analyses compounds",
        ),
        unit_row(
            "2112",
            "Biological scientists",
            "Biological scientists examine and investigate the morphology, structure, and physical characteristics of living organisms.",
            "Entrants usually possess a degree and some roles may require a postgraduate qualification.",
            "Tasks:\n~studies the physical form, structure, composition and function of living organisms\n~observes the structure of communities of organisms",
        ),
        group_row(
            "4",
            "Administrative and secretarial occupations",
            "Occupations within this major group undertake general administrative, clerical and secretarial work.",
        ),
        group_row("41", "Administrative occupations", "Administrative occupations undertake clerical duties."),
        group_row(
            "411",
            "Administrative occupations: Government and related organisations",
            "Workers in this minor group undertake administrative duties in government.",
        ),
        unit_row(
            "4111",
            "National government administrative occupations",
            "National government administrative occupations undertake a variety of administrative and clerical duties in national government departments.",
            "Entry is possible to junior grades within this group with GCSEs/S grades.",
            "Tasks:\n~assists senior government officers with policy work\n~responds to telephone enquiries and other forms of correspondence",
        ),
        group_row("9", "Elementary occupations", "This major group covers occupations which require the knowledge and experience necessary to perform mostly routine tasks."),
        group_row("92", "Elementary administration and service occupations", "Elementary administration and service occupations perform routine tasks."),
        group_row("926", "Elementary storage occupations", "Elementary storage occupations move and store goods."),
        unit_row(
            "9265",
            "Warehouse operatives",
            "Warehouse operatives receive, store and dispatch goods.",
            "There are no formal academic entry requirements.",
            "Tasks:\n~loads and unloads goods\n~checks goods against delivery notes",
        ),
    ]
}

pub(crate) fn index_rows() -> Vec<IndexRow> {
    vec![
        IndexRow::new("1111", "Chief executive"),
        IndexRow::new("1111", "Managing director"),
        IndexRow::new("1112", "Member of parliament"),
        IndexRow::new("2111", "Chemist"),
        IndexRow::new("2111", "Analytical chemist"),
        IndexRow::new("2112", "Zoologist"),
        IndexRow::new("2112", "Biologist"),
        IndexRow::new("2112", "Marine biologist"),
        IndexRow {
            code: "2112".to_string(),
            title: None,
        },
        IndexRow::new("4111", "Benefits fraud investigator (government)"),
        IndexRow::new("4111", "Tax officer (government)"),
        IndexRow::new("9265", "Warehouse operative"),
        IndexRow::new("8139", "Saw doctor"),
    ]
}

//! Postback state for loading a past report card run on `Assignments.aspx`.
//!
//! The page is an ASP.NET web form: switching the run is a postback that
//! must carry the view state, its generator and the event validation value
//! from a fresh load of the same page. They are tied to that page load and
//! must be scraped again for every query.

use scraper::Html;

use crate::core::html_parser::{all, element_text, input_value};
use crate::error::HacError;

const RUN_SELECT: &str = "select#plnMain_ddlReportCardRuns option";
const RUN_FIELD: &str = "ctl00$plnMain$ddlReportCardRuns";

/// Hidden fields the classwork form posts back unchanged.
const CLASSWORK_FORM_FIELDS: [(&str, &str); 45] = [
    ("__EVENTTARGET", "ctl00$plnMain$btnRefreshView"),
    ("__EVENTARGUMENT", ""),
    ("__LASTFOCUS", ""),
    ("ctl00$plnMain$hdnValidMHACLicense", "Y"),
    ("ctl00$plnMain$hdnIsVisibleClsWrk", "N"),
    ("ctl00$plnMain$hdnIsVisibleCrsAvg", "N"),
    (
        "ctl00$plnMain$hdnJsAlert",
        "Averages cannot be displayed when  Report Card Run is set to (All Runs).",
    ),
    ("ctl00$plnMain$hdnTitle", "Classwork"),
    ("ctl00$plnMain$hdnLastUpdated", "Last Updated"),
    ("ctl00$plnMain$hdnDroppedCourse", " This course was dropped as of "),
    ("ctl00$plnMain$hdnddlClasses", "(All Classes)"),
    ("ctl00$plnMain$hdnddlCompetencies", "(All Classes)"),
    ("ctl00$plnMain$hdnCompDateDue", "Date Due"),
    ("ctl00$plnMain$hdnCompDateAssigned", "Date Assigned"),
    ("ctl00$plnMain$hdnCompCourse", "Course"),
    ("ctl00$plnMain$hdnCompAssignment", "Assignment"),
    (
        "ctl00$plnMain$hdnCompAssignmentLabel",
        "Assignments Not Related to Any Competency",
    ),
    ("ctl00$plnMain$hdnCompNoAssignments", "No assignments found"),
    (
        "ctl00$plnMain$hdnCompNoClasswork",
        "Classwork could not be found for this competency for the selected report card run.",
    ),
    ("ctl00$plnMain$hdnCompScore", "Score"),
    ("ctl00$plnMain$hdnCompPoints", "Points"),
    ("ctl00$plnMain$hdnddlReportCardRuns1", "(All Runs)"),
    ("ctl00$plnMain$hdnddlReportCardRuns2", "(All Terms)"),
    ("ctl00$plnMain$hdnbtnShowAverage", "Show All Averages"),
    ("ctl00$plnMain$hdnShowAveragesToolTip", "Show all student's averages"),
    ("ctl00$plnMain$hdnPrintClassworkToolTip", "Print all classwork"),
    ("ctl00$plnMain$hdnPrintClasswork", "Print Classwork"),
    ("ctl00$plnMain$hdnCollapseToolTip", "Collapse all courses"),
    ("ctl00$plnMain$hdnCollapse", "Collapse All"),
    ("ctl00$plnMain$hdnFullToolTip", "Switch courses to Full View"),
    ("ctl00$plnMain$hdnViewFull", "Full View"),
    ("ctl00$plnMain$hdnQuickToolTip", "Switch courses to Quick View"),
    ("ctl00$plnMain$hdnViewQuick", "Quick View"),
    ("ctl00$plnMain$hdnExpand", "Expand All"),
    ("ctl00$plnMain$hdnExpandToolTip", "Expand all courses"),
    (
        "ctl00$plnMain$hdnChildCompetencyMessage",
        "This competency is calculated as an average of the following competencies",
    ),
    ("ctl00$plnMain$hdnCompetencyScoreLabel", "Grade"),
    ("ctl00$plnMain$hdnAverageDetailsDialogTitle", "Average Details"),
    ("ctl00$plnMain$hdnAssignmentCompetency", "Assignment Competency"),
    ("ctl00$plnMain$hdnAssignmentCourse", "Assignment Course"),
    ("ctl00$plnMain$hdnTooltipTitle", "Title"),
    ("ctl00$plnMain$hdnCategory", "Category"),
    ("ctl00$plnMain$ddlClasses", "ALL"),
    ("ctl00$plnMain$ddlCompetencies", "ALL"),
    ("ctl00$plnMain$ddlOrderBy", "Class"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

/// State harvested from one live load of the classwork page.
#[derive(Debug, Clone)]
pub struct TermForm {
    pub view_state: String,
    pub view_state_generator: String,
    pub event_validation: String,
    pub runs: Vec<RunOption>,
}

impl TermForm {
    /// Report card run value to post for `quarter`.
    ///
    /// Accepts an exact option value (`"2-2025"`), the run number (`"2"`),
    /// or falls back to the run number plus the selected option's year.
    pub fn resolve_run(&self, quarter: &str) -> String {
        let quarter = quarter.trim();

        if let Some(run) = self.runs.iter().find(|run| run.value == quarter) {
            return run.value.clone();
        }
        if let Some(run) = self
            .runs
            .iter()
            .find(|run| run_number(&run.value) == quarter || run.label == quarter)
        {
            return run.value.clone();
        }

        let year = self
            .runs
            .iter()
            .find(|run| run.selected)
            .and_then(|run| run.value.split_once('-'))
            .map(|(_, year)| year.to_string());
        match year {
            Some(year) => format!("{quarter}-{year}"),
            None => quarter.to_string(),
        }
    }

    /// Form body for the postback that loads `quarter`.
    pub fn payload(&self, quarter: &str) -> Vec<(String, String)> {
        let mut form: Vec<(String, String)> = CLASSWORK_FORM_FIELDS
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();
        form.push(("__VIEWSTATE".to_string(), self.view_state.clone()));
        form.push((
            "__VIEWSTATEGENERATOR".to_string(),
            self.view_state_generator.clone(),
        ));
        form.push(("__EVENTVALIDATION".to_string(), self.event_validation.clone()));
        form.push((RUN_FIELD.to_string(), self.resolve_run(quarter)));
        form
    }
}

fn run_number(value: &str) -> &str {
    value.split_once('-').map(|(run, _)| run).unwrap_or(value)
}

/// Reads the postback state from a live `Assignments.aspx` load.
pub fn parse_term_form(html: &str) -> Result<TermForm, HacError> {
    let document = Html::parse_document(html);

    let view_state = input_value(&document, "__VIEWSTATE")?;
    let view_state_generator = input_value(&document, "__VIEWSTATEGENERATOR")?;
    let event_validation = input_value(&document, "__EVENTVALIDATION")?;

    let runs = all(document.root_element(), RUN_SELECT)?
        .into_iter()
        .map(|option| RunOption {
            value: option.value().attr("value").unwrap_or_default().trim().to_string(),
            label: element_text(option),
            selected: option.value().attr("selected").is_some(),
        })
        .collect();

    Ok(TermForm {
        view_state,
        view_state_generator,
        event_validation,
        runs,
    })
}

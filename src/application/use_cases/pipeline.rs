// ============================================================
// CORPUS PIPELINE
// ============================================================
// Orchestrates one corpus build from the CSV inputs to the JSONL
// corpus and copied image directory

use serde::Serialize;
use tracing::info;

use super::describe::describe_all;
use super::format::format_conversations;
use super::join::inner_join;
use super::qa::qa_all;
use super::reshape::reshape_images;
use crate::domain::error::Result;
use crate::domain::schema::CASE_ID;
use crate::infrastructure::config::PipelineConfig;
use crate::infrastructure::csv::CsvTableReader;
use crate::infrastructure::images::{copy_images, log_directory_contents};
use crate::infrastructure::jsonl::write_jsonl;

/// Counters reported after one corpus build.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct PipelineSummary {
    pub case_rows: usize,
    pub label_rows: usize,
    pub joined_rows: usize,
    pub image_records: usize,
    pub close_up_records: usize,
    pub qa_records: usize,
    pub conversations_written: usize,
    pub images_copied: usize,
    pub images_failed: usize,
}

/// One line of the optional descriptions sidecar.
#[derive(Debug, Serialize)]
struct DescriptionLine<'a> {
    case_id: &'a str,
    image_path: &'a str,
    description: &'a str,
}

/// The corpus build use case.
pub struct CorpusPipeline {
    config: PipelineConfig,
}

impl CorpusPipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run the full build: join, reshape, describe, filter, QA,
    /// format, write, copy.
    pub fn run(&self) -> Result<PipelineSummary> {
        log_directory_contents(&self.config.dataset_root);

        let reader = CsvTableReader::new();
        let cases = reader.read_table(&self.config.cases_csv)?;
        let labels = reader.read_table(&self.config.labels_csv)?;
        let (case_rows, label_rows) = (cases.len(), labels.len());
        info!(case_rows, label_rows, "loaded input tables");

        let joined = inner_join(&cases, &labels, CASE_ID)?;
        let joined_rows = joined.len();
        info!(joined_rows, "joined cases with labels");

        let records = reshape_images(&joined);
        let image_records = records.len();
        info!(image_records, "reshaped cases into image records");

        let described = describe_all(records);

        if let Some(path) = &self.config.descriptions_jsonl {
            let lines: Vec<DescriptionLine> = described
                .iter()
                .map(|described| DescriptionLine {
                    case_id: &described.record.case_id,
                    image_path: &described.record.image_path,
                    description: &described.description,
                })
                .collect();
            let written = write_jsonl(path, &lines)?;
            info!(path = %path.display(), written, "wrote descriptions sidecar");
        }

        let close_ups: Vec<_> = described
            .into_iter()
            .map(|described| described.record)
            .filter(|record| record.shot_type.as_deref() == Some(self.config.shot_type.as_str()))
            .collect();
        let close_up_records = close_ups.len();

        let qa_records = qa_all(close_ups);
        info!(
            close_up_records,
            qa_records = qa_records.len(),
            shot_type = %self.config.shot_type,
            "synthesized question/answer pairs"
        );

        let entries = format_conversations(&qa_records, &self.config.image_base);
        let conversations_written = write_jsonl(&self.config.output_jsonl, &entries)?;
        info!(
            path = %self.config.output_jsonl.display(),
            conversations_written,
            "wrote conversation corpus"
        );

        let outcome = copy_images(
            qa_records.iter().map(|qa| qa.record.image_path.as_str()),
            &self.config.dataset_root,
            &self.config.images_dir,
        )?;
        info!(copied = outcome.copied, failed = outcome.failed, "copied referenced images");

        Ok(PipelineSummary {
            case_rows,
            label_rows,
            joined_rows,
            image_records,
            close_up_records,
            qa_records: qa_records.len(),
            conversations_written,
            images_copied: outcome.copied,
            images_failed: outcome.failed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    const CASES_CSV: &str = "\
case_id,image_1_path,image_1_shot_type,source,release,year
001,a.jpg,CLOSE_UP,app,1.0,2023
002,b.jpg,WIDE,app,1.0,2023
003,c.jpg,CLOSE_UP,app,1.0,2023";

    const LABELS_CSV: &str = "\
case_id,dermatologist_gradable_for_skin_condition_1,dermatologist_skin_condition_on_label_name
001,DEFAULT_YES_IMAGE_QUALITY_SUFFICIENT,\"['eczema']\"
002,DEFAULT_YES_IMAGE_QUALITY_SUFFICIENT,\"['acne']\"
004,DEFAULT_YES_IMAGE_QUALITY_SUFFICIENT,\"['psoriasis']\"";

    fn write_dataset(root: &Path) {
        fs::write(root.join("cases.csv"), CASES_CSV).unwrap();
        fs::write(root.join("labels.csv"), LABELS_CSV).unwrap();
        fs::write(root.join("a.jpg"), b"jpeg bytes").unwrap();
    }

    fn test_config(root: &Path, out: &Path) -> PipelineConfig {
        PipelineConfig {
            cases_csv: root.join("cases.csv"),
            labels_csv: root.join("labels.csv"),
            dataset_root: root.to_path_buf(),
            output_jsonl: out.join("corpus.jsonl"),
            images_dir: out.join("images"),
            image_base: "llava".to_string(),
            shot_type: "CLOSE_UP".to_string(),
            descriptions_jsonl: Some(out.join("descriptions.jsonl")),
        }
    }

    #[test]
    fn test_end_to_end_round_trip() {
        let root = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        write_dataset(root.path());

        let config = test_config(root.path(), out.path());
        let summary = CorpusPipeline::new(config.clone()).run().unwrap();

        // Case 003 has no label row, label 004 has no case row.
        assert_eq!(summary.joined_rows, 2);
        assert_eq!(summary.image_records, 2);
        // Case 002 is a WIDE shot.
        assert_eq!(summary.close_up_records, 1);
        assert_eq!(summary.qa_records, 1);
        // Two paraphrased condition questions plus the gradability one.
        assert_eq!(summary.conversations_written, 3);
        assert_eq!(summary.images_copied, 1);
        assert_eq!(summary.images_failed, 0);

        let corpus = fs::read_to_string(&config.output_jsonl).unwrap();
        let entries: Vec<serde_json::Value> = corpus
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(entries.len(), 3);

        let eczema_answers = entries
            .iter()
            .filter(|entry| {
                entry["conversations"][1]["value"]
                    == "The dermatologist labeled the skin condition(s) as eczema. "
            })
            .count();
        assert!(eczema_answers >= 2);

        for entry in &entries {
            assert_eq!(entry["image"], "llava/a.jpg");
            assert_eq!(entry["conversations"][0]["from"], "human");
            let question = entry["conversations"][0]["value"].as_str().unwrap();
            assert!(question.starts_with("[INST] <image>\n"));
            assert!(question.ends_with("[/INST]"));
        }

        assert!(config.images_dir.join("a.jpg").exists());

        let sidecar = fs::read_to_string(config.descriptions_jsonl.unwrap()).unwrap();
        assert_eq!(sidecar.lines().count(), 2);
        assert!(sidecar.contains("eczema"));
    }

    #[test]
    fn test_missing_input_fails() {
        let out = tempfile::tempdir().unwrap();
        let config = test_config(Path::new("/nonexistent"), out.path());

        assert!(CorpusPipeline::new(config).run().is_err());
    }

    #[test]
    fn test_no_close_ups_writes_empty_corpus() {
        let root = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        write_dataset(root.path());

        let mut config = test_config(root.path(), out.path());
        config.shot_type = "ANGLED".to_string();
        config.descriptions_jsonl = None;

        let summary = CorpusPipeline::new(config.clone()).run().unwrap();

        assert_eq!(summary.close_up_records, 0);
        assert_eq!(summary.conversations_written, 0);
        assert_eq!(fs::read_to_string(&config.output_jsonl).unwrap(), "");
    }
}

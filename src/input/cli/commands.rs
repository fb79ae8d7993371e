use std::error::Error;
use std::io::{self, Write};

use tracing::warn;

use crate::controllers::ports::report_presenter::ReportPresenterPort;
use crate::controllers::render::RenderController;
use crate::controllers::scaling::ScalingController;
use crate::core::actions::measure_scaling::report::ScalingProtocol;
use crate::core::actions::measure_scaling::scaling_config::ScalingConfig;
use crate::core::actions::measure_scaling::scheduler_workload::SchedulerWorkload;
use crate::core::data::execution_mode::ExecutionMode;
use crate::input::cli::{Cli, Command, ModeArg, ModelArgs, RenderArgs, ScalingArgs};
use crate::presenters::file::ppm::PpmFilePresenter;
use crate::presenters::report::json::JsonReportPresenter;
use crate::presenters::report::table::TableReportPresenter;

pub type CommandResult = Result<(), Box<dyn Error>>;

pub fn run(cli: Cli) -> CommandResult {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Render(args) => render(&args, &mut out),
        Command::Strong(args) => scaling(ScalingProtocol::Strong, &args, &mut out),
        Command::Weak(args) => scaling(ScalingProtocol::Weak, &args, &mut out),
        Command::Model(args) => model(&args, &mut out),
    }
}

pub fn render(args: &RenderArgs, out: &mut dyn Write) -> CommandResult {
    if args.mode == ModeArg::Serial && args.workers.is_some() {
        warn!("--workers is ignored in serial mode");
    }

    let config = args.view.render_config(args.execution_mode()?);
    let mut controller = RenderController::new(PpmFilePresenter::new());
    let (matrix, elapsed) = controller.generate(&config)?;
    controller.write(&args.output)?;

    match config.mode {
        ExecutionMode::Serial => writeln!(
            out,
            "Mode: serial\tWidth: {}\tHeight: {}\tTime: {:.4} seconds",
            matrix.width(),
            matrix.height(),
            elapsed.as_secs_f64()
        )?,
        ExecutionMode::Parallel(count) => writeln!(
            out,
            "Mode: parallel\tWidth: {}\tHeight: {}\tNum of threads: {}\tTime: {:.4} seconds",
            matrix.width(),
            matrix.height(),
            count.resolve().get(),
            elapsed.as_secs_f64()
        )?,
    }

    Ok(())
}

pub fn scaling(protocol: ScalingProtocol, args: &ScalingArgs, out: &mut dyn Write) -> CommandResult {
    if args.json {
        sweep(JsonReportPresenter::default(), protocol, args, out)
    } else {
        sweep(TableReportPresenter::default(), protocol, args, out)
    }
}

fn sweep<P: ReportPresenterPort>(
    presenter: P,
    protocol: ScalingProtocol,
    args: &ScalingArgs,
    out: &mut dyn Write,
) -> CommandResult {
    // The mode is chosen per configuration by the harness.
    let render = args.view.render_config(ExecutionMode::Serial);
    let scaling = ScalingConfig {
        worker_counts: args.workers.clone(),
        repetitions: args.repetitions,
        baseline_repetitions: args.baseline_repetitions,
        prediction_max_workers: args.max_workers,
    };
    let workload = SchedulerWorkload::new(render.policy);

    ScalingController::new(presenter).run(
        protocol,
        workload,
        &render,
        &scaling,
        args.reference,
        out,
    )?;

    Ok(())
}

pub fn model(args: &ModelArgs, out: &mut dyn Write) -> CommandResult {
    if args.json {
        ScalingController::new(JsonReportPresenter::default()).model(
            args.serial_time,
            args.parallel_time,
            args.workers,
            args.max_workers,
            out,
        )?;
    } else {
        ScalingController::new(TableReportPresenter::default()).model(
            args.serial_time,
            args.parallel_time,
            args.workers,
            args.max_workers,
            out,
        )?;
    }

    Ok(())
}

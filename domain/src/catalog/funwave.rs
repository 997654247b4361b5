//! FUNWAVE-TVD driver parameters, one function per category.
//!
//! Inside a category the declaration order is the order of the driver file.

use crate::parameter::dependency::Requirement;
use crate::parameter::entity::ParameterSpec;
use crate::schema::Category::*;
use crate::schema::Datatype::*;
use crate::schema::Mask;

/// Every declaration, category by category.
pub fn declarations() -> Vec<ParameterSpec> {
    [
        general(),
        grid(),
        bathymetry(),
        time(),
        output(),
        physics(),
        breaking(),
        numerics(),
        periodic(),
        sponge_layer(),
        stations(),
        wave_maker(),
        obstacles(),
        hot_start(),
        parallel(),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn general() -> Vec<ParameterSpec> {
    vec![
        ParameterSpec::new("TITLE", String, General)
            .description("Title of the run, echoed in the log"),
    ]
}

fn grid() -> Vec<ParameterSpec> {
    vec![
        ParameterSpec::new("ZALPHA", Flag, Grid)
            .default_value(false)
            .description("FORTRAN compile flag for the z-alpha dispersion reference level"),
        ParameterSpec::new("Mglob", Integer, Grid)
            .required()
            .mask(Mask::PositiveDefinite)
            .description("Number of points in x direction"),
        ParameterSpec::new("Nglob", Integer, Grid)
            .required()
            .mask(Mask::PositiveDefinite)
            .description("Number of points in y direction"),
        ParameterSpec::new("CARTESIAN", Flag, Grid)
            .full_name("Cartesian")
            .required()
            .default_value(true)
            .description("FORTRAN compile flag for switch between cartesian coordinates and spherical coordinates"),
        ParameterSpec::new("DX", Float, Grid)
            .required()
            .mask(Mask::PositiveDefinite)
            .description("Spatial resolution in the x direction")
            .depends_on("CARTESIAN", true),
        ParameterSpec::new("DY", Float, Grid)
            .required()
            .mask(Mask::PositiveDefinite)
            .description("Spatial resolution in the y direction")
            .depends_on("CARTESIAN", true),
        ParameterSpec::new("StretchGrid", Bool, Grid)
            .default_value(false)
            .description("Flag for using a grid varying grid point spacing")
            .depends_on("CARTESIAN", false),
        ParameterSpec::new("DX_FILE", Path, Grid)
            .required()
            .description("Path to text file of spacing between x grid points")
            .depends_on("StretchGrid", true),
        ParameterSpec::new("DY_FILE", Path, Grid)
            .required()
            .description("Path to text file of spacing between y grid points")
            .depends_on("StretchGrid", true),
        ParameterSpec::new("CORIOLIS_FILE", Path, Grid)
            .required()
            .description("Path to text file of Coriolis parameters at each grid point")
            .depends_on("StretchGrid", true),
        ParameterSpec::new("Lon_West", Float, Grid)
            .required()
            .bounds(-180.0, 180.0)
            .description("Longitude of west boundary in degrees")
            .depends_on("CARTESIAN", false),
        ParameterSpec::new("Lat_South", Float, Grid)
            .required()
            .bounds(-90.0, 90.0)
            .description("Latitude of south boundary in degrees")
            .depends_on("CARTESIAN", false),
        ParameterSpec::new("Dphi", Float, Grid)
            .required()
            .mask(Mask::PositiveDefinite)
            .description("Spatial resolution in degree in the longitude direction")
            .depends_on("CARTESIAN", false),
        ParameterSpec::new("Dtheta", Float, Grid)
            .required()
            .mask(Mask::PositiveDefinite)
            .description("Spatial resolution in degree in the latitude direction")
            .depends_on("CARTESIAN", false),
    ]
}

fn bathymetry() -> Vec<ParameterSpec> {
    vec![
        ParameterSpec::new("DEPTH_TYPE", Enum, Bathymetry)
            .tokens(["FLAT", "DATA", "SLOPE"])
            .default_value("FLAT")
            .description("Bathymetry/Depth type to use"),
        ParameterSpec::new("BATHY_CORRECTION", Bool, Bathymetry)
            .default_value(false)
            .description("Flag to using built in iterative local smoothing scheme to bathymetry data"),
        ParameterSpec::new("WaterLevel", Float, Bathymetry)
            .default_value(0.0)
            .description("Additional water level to add/subtract from still water level in bathymetry data"),
        ParameterSpec::new("DEPTH_FILE", Path, Bathymetry)
            .required()
            .description("Path to text file of still water level depth at each grid point. Note, positive values denote below water level")
            .depends_on("DEPTH_TYPE", "DATA"),
        ParameterSpec::new("DEPTH_FLAT", Float, Bathymetry)
            .mask(Mask::PositiveDefinite)
            .default_value(10.0)
            .description("Depth of flat region in bathymetry. Note, positive values denote below water level")
            .depends_on("DEPTH_TYPE", "FLAT"),
        ParameterSpec::new("SLP", Float, Bathymetry)
            .default_value(0.1)
            .description("Slope of beach")
            .depends_on("DEPTH_TYPE", "SLOPE"),
        ParameterSpec::new("Xslp", Float, Bathymetry)
            .mask(Mask::Positive)
            .default_value(0.0)
            .description("x location to transition between flat depth and slope region")
            .depends_on("DEPTH_TYPE", "SLOPE"),
    ]
}

fn time() -> Vec<ParameterSpec> {
    vec![
        ParameterSpec::new("TOTAL_TIME", Float, Time)
            .required()
            .mask(Mask::PositiveDefinite)
            .description("Total simulation time for run"),
        ParameterSpec::new("PLOT_START_TIME", Float, Time)
            .mask(Mask::Positive)
            .default_value(0.0)
            .description("Optional offset for initial start time of run"),
        ParameterSpec::new("PLOT_INTV", Float, Time)
            .mask(Mask::PositiveDefinite)
            .default_value(1.0)
            .description("Time interval between writing 2D field data to file"),
        ParameterSpec::new("SCREEN_INTV", Float, Time)
            .mask(Mask::PositiveDefinite)
            .default_value(1.0)
            .description("Time interval between summary updates in log file output"),
    ]
}

fn output() -> Vec<ParameterSpec> {
    vec![
        ParameterSpec::new("RESULT_FOLDER", Path, Output)
            .default_value("output/")
            .description("Folder receiving the field and station output"),
        ParameterSpec::new("FIELD_IO_TYPE", Enum, Output)
            .tokens(["ASCII", "BINARY"])
            .default_value("ASCII")
            .description("File format of the 2D field output"),
        ParameterSpec::new("DEPTH_OUT", OutFlag, Output)
            .default_value(false)
            .description("Write the still water depth"),
        ParameterSpec::new("U", OutFlag, Output)
            .default_value(false)
            .description("Write the x velocity"),
        ParameterSpec::new("V", OutFlag, Output)
            .default_value(false)
            .description("Write the y velocity"),
        ParameterSpec::new("ETA", OutFlag, Output)
            .default_value(false)
            .description("Write the surface elevation"),
        ParameterSpec::new("Hmax", OutFlag, Output)
            .default_value(false)
            .description("Write the maximum wave height"),
        ParameterSpec::new("Hmin", OutFlag, Output)
            .default_value(false)
            .description("Write the minimum surface elevation"),
        ParameterSpec::new("MFmax", OutFlag, Output)
            .default_value(false)
            .description("Write the maximum momentum flux"),
        ParameterSpec::new("Umax", OutFlag, Output)
            .default_value(false)
            .description("Write the maximum velocity"),
        ParameterSpec::new("VORmax", OutFlag, Output)
            .default_value(false)
            .description("Write the maximum vorticity"),
        ParameterSpec::new("MASK", OutFlag, Output)
            .default_value(false)
            .description("Write the wet/dry mask"),
        ParameterSpec::new("MASK9", OutFlag, Output)
            .default_value(false)
            .description("Write the nine-point wet/dry mask"),
        ParameterSpec::new("P", OutFlag, Output)
            .default_value(false)
            .description("Write the x volume flux"),
        ParameterSpec::new("Q", OutFlag, Output)
            .default_value(false)
            .description("Write the y volume flux"),
        ParameterSpec::new("OUT_NU", OutFlag, Output)
            .default_value(false)
            .description("Write the breaking eddy viscosity"),
        ParameterSpec::new("ROLLER", OutFlag, Output)
            .default_value(false)
            .description("Write the surface roller"),
        ParameterSpec::new("UNDERTOW", OutFlag, Output)
            .default_value(false)
            .description("Write the undertow velocity"),
        ParameterSpec::new("WaveHeight", OutFlag, Output)
            .default_value(false)
            .description("Write the wave height"),
        ParameterSpec::new("AGE", OutFlag, Output)
            .default_value(false)
            .description("Write the breaking age"),
    ]
}

fn physics() -> Vec<ParameterSpec> {
    vec![
        ParameterSpec::new("DISPERSION", Bool, Physics)
            .default_value(true)
            .description("Include the dispersive terms; false solves the shallow water equations"),
        ParameterSpec::new("Gamma1", Float, Physics)
            .mask(Mask::Positive)
            .default_value(1.0)
            .description("Switch for the nonlinear dispersive terms (1 on, 0 off)"),
        ParameterSpec::new("FRICTION_MATRIX", Bool, Physics)
            .default_value(false)
            .description("Read a spatially varying friction coefficient from file"),
        ParameterSpec::new("Gamma2", Float, Physics)
            .mask(Mask::Positive)
            .default_value(1.0)
            .description("Switch for the convection terms (1 on, 0 off)")
            .depends_on("CARTESIAN", true),
        ParameterSpec::new("Beta_ref", Float, Physics)
            .default_value(-0.531)
            .description("Reference level of the dispersion model")
            .depends_on("CARTESIAN", true)
            .depends_on("ZALPHA", true),
        ParameterSpec::new("Gamma3", Float, Physics)
            .mask(Mask::Positive)
            .default_value(1.0)
            .description("Switch between linear (0) and fully nonlinear (1) equations")
            .depends_on("CARTESIAN", true),
        ParameterSpec::new("FRICTION_FILE", Path, Physics)
            .required()
            .description("Path to the spatially varying friction coefficients")
            .depends_on("FRICTION_MATRIX", true),
        ParameterSpec::new("Cd", Float, Physics)
            .mask(Mask::Positive)
            .default_value(0.0)
            .description("Uniform bottom friction coefficient")
            .depends_on("FRICTION_MATRIX", false),
    ]
}

fn breaking() -> Vec<ParameterSpec> {
    vec![
        ParameterSpec::new("ROLLER_EFFECT", Bool, Breaking)
            .default_value(false)
            .description("Include the surface roller"),
        ParameterSpec::new("VISCOSITY_BREAKING", Bool, Breaking)
            .default_value(true)
            .description("Use the eddy viscosity breaking model"),
        ParameterSpec::new("SHOW_BREAKING", Bool, Breaking)
            .default_value(true)
            .description("Write breaking locations to the output"),
        ParameterSpec::new("WAVEMAKER_Cbrk", Float, Breaking)
            .default_value(1.0)
            .description("Breaking criterion inside the wavemaker region"),
        ParameterSpec::new("WAVEMAKER_VIS", Bool, Breaking)
            .default_value(false)
            .description("Apply viscosity breaking inside the wavemaker region"),
        ParameterSpec::new("SWE_ETA_DEP", Float, Breaking)
            .default_value(0.8)
            .description("Elevation to depth ratio for switching to shallow water equations")
            .depends_on("VISCOSITY_BREAKING", false),
        ParameterSpec::new("Cbrk1", Float, Breaking)
            .default_value(0.45)
            .description("Breaking onset criterion")
            .depends_on("SHOW_BREAKING", true),
        ParameterSpec::new("Cbrk2", Float, Breaking)
            .default_value(0.35)
            .description("Breaking stop criterion")
            .depends_on("SHOW_BREAKING", true),
        ParameterSpec::new("visbrk", Float, Breaking)
            .required()
            .description("Breaking viscosity coefficient")
            .depends_on("WAVEMAKER_VIS", true),
        ParameterSpec::new("WAVEMAKER_visbrk", Float, Breaking)
            .required()
            .description("Breaking viscosity coefficient inside the wavemaker region")
            .depends_on("WAVEMAKER_VIS", true),
    ]
}

fn numerics() -> Vec<ParameterSpec> {
    vec![
        ParameterSpec::new("Time_Scheme", Enum, Numerics)
            .tokens(["Runge_Kutta", "Predictor_Corrector"])
            .default_value("Runge_Kutta")
            .description("Time stepping scheme"),
        ParameterSpec::new("CONSTRUCTION", Enum, Numerics)
            .tokens(["HLLC"])
            .default_value("HLLC")
            .description("Riemann solver construction"),
        ParameterSpec::new("HIGH_ORDER", Enum, Numerics)
            .tokens(["FOURTH", "THIRD"])
            .default_value("FOURTH")
            .description("Spatial order of the reconstruction"),
        ParameterSpec::new("CFL", Float, Numerics)
            .mask(Mask::PositiveDefinite)
            .default_value(0.5)
            .description("Courant-Friedrichs-Lewy number"),
        ParameterSpec::new("FIXED_DT", Bool, Numerics)
            .default_value(false)
            .description("Use a fixed time step"),
        ParameterSpec::new("FroudeCap", Float, Numerics)
            .mask(Mask::PositiveDefinite)
            .default_value(3.0)
            .description("Upper limit of the local Froude number"),
        ParameterSpec::new("MinDepth", Float, Numerics)
            .mask(Mask::PositiveDefinite)
            .default_value(0.1)
            .description("Minimum depth for wetting and drying"),
        ParameterSpec::new("MinDepthFrc", Float, Numerics)
            .mask(Mask::PositiveDefinite)
            .default_value(0.1)
            .description("Minimum depth used in the friction term"),
        ParameterSpec::new("OUT_Time", Bool, Numerics)
            .default_value(false)
            .description("Write wave arrival times"),
        ParameterSpec::new("ArrTimeMin", Float, Numerics)
            .default_value(0.001)
            .description("Minimum elevation for registering the wave arrival")
            .depends_on("OUT_Time", true),
    ]
}

fn periodic() -> Vec<ParameterSpec> {
    vec![
        ParameterSpec::new("PERIODIC", Bool, Periodic)
            .default_value(false)
            .description("Periodic boundary conditions in the y direction")
            .depends_on("CARTESIAN", true),
    ]
}

fn sponge_layer() -> Vec<ParameterSpec> {
    vec![
        ParameterSpec::new("DIRECT_SPONGE", Bool, SpongeLayer)
            .default_value(false)
            .description("Use the direct sponge layer at the domain boundaries"),
        ParameterSpec::new("DIFFUSION_SPONGE", Bool, SpongeLayer)
            .default_value(false)
            .description("Use the diffusion sponge layer at the domain boundaries"),
        ParameterSpec::new("FRICTION_SPONGE", Bool, SpongeLayer)
            .default_value(false)
            .description("Use the friction sponge layer at the domain boundaries"),
        ParameterSpec::new("Csp", Float, SpongeLayer)
            .mask(Mask::PositiveDefinite)
            .default_value(0.1)
            .description("Coefficient of the diffusion sponge")
            .depends_on("DIFFUSION_SPONGE", true),
        ParameterSpec::new("CDsponge", Float, SpongeLayer)
            .mask(Mask::PositiveDefinite)
            .default_value(5.0)
            .description("Coefficient of the friction sponge")
            .depends_on("FRICTION_SPONGE", true),
        ParameterSpec::new("Sponge_west_width", Float, SpongeLayer)
            .mask(Mask::Positive)
            .default_value(0.0)
            .description("Width of the west sponge layer")
            .depends_on("DIRECT_SPONGE", true)
            .depends_on("DIFFUSION_SPONGE", true)
            .depends_on("FRICTION_SPONGE", true),
        ParameterSpec::new("Sponge_east_width", Float, SpongeLayer)
            .mask(Mask::Positive)
            .default_value(0.0)
            .description("Width of the east sponge layer")
            .depends_on("DIRECT_SPONGE", true)
            .depends_on("DIFFUSION_SPONGE", true)
            .depends_on("FRICTION_SPONGE", true),
        ParameterSpec::new("Sponge_south_width", Float, SpongeLayer)
            .mask(Mask::Positive)
            .default_value(0.0)
            .description("Width of the south sponge layer")
            .depends_on("DIRECT_SPONGE", true)
            .depends_on("DIFFUSION_SPONGE", true)
            .depends_on("FRICTION_SPONGE", true),
        ParameterSpec::new("Sponge_north_width", Float, SpongeLayer)
            .mask(Mask::Positive)
            .default_value(0.0)
            .description("Width of the north sponge layer")
            .depends_on("DIRECT_SPONGE", true)
            .depends_on("DIFFUSION_SPONGE", true)
            .depends_on("FRICTION_SPONGE", true),
        ParameterSpec::new("R_sponge", Float, SpongeLayer)
            .mask(Mask::PositiveDefinite)
            .default_value(0.85)
            .description("Decay rate of the direct sponge")
            .depends_on("DIRECT_SPONGE", true)
            .depends_on("DIFFUSION_SPONGE", true)
            .depends_on("FRICTION_SPONGE", true),
        ParameterSpec::new("A_sponge", Float, SpongeLayer)
            .mask(Mask::PositiveDefinite)
            .default_value(5.0)
            .description("Maximum damping of the direct sponge")
            .depends_on("DIRECT_SPONGE", true)
            .depends_on("DIFFUSION_SPONGE", true)
            .depends_on("FRICTION_SPONGE", true),
    ]
}

fn stations() -> Vec<ParameterSpec> {
    vec![
        ParameterSpec::new("NumberStations", Integer, Stations)
            .mask(Mask::Positive)
            .default_value(0)
            .description("Number of gauge stations"),
        ParameterSpec::new("PLOT_INTV_STATION", Float, Stations)
            .mask(Mask::PositiveDefinite)
            .default_value(1.0)
            .description("Time interval between station outputs")
            .depends_on("NumberStations", Mask::PositiveDefinite),
        ParameterSpec::new("StationOutputBuffer", Integer, Stations)
            .mask(Mask::PositiveDefinite)
            .default_value(1000)
            .description("Number of station records buffered before writing")
            .depends_on("NumberStations", Mask::PositiveDefinite),
        ParameterSpec::new("STATIONS_FILE", Path, Stations)
            .required()
            .description("Path to the station locations")
            .depends_on("NumberStations", Mask::PositiveDefinite),
    ]
}

fn wave_maker() -> Vec<ParameterSpec> {
    vec![
        ParameterSpec::new("WAVEMAKER", Enum, WaveMaker)
            .tokens([
                "LEF_SOL",
                "WK_TIME",
                "INI_SOL",
                "N_WAVE",
                "INI_REC",
                "INI_GAU",
                "INI_DIP",
                "WK_REG",
                "WK_IRR",
                "TMA_1D",
                "JON_1D",
                "JON_2D",
                "WK_NEW_DATA2D",
                "WK_DATA2D",
                "ABS",
                "LEFT_BC_IRR",
                "WK_NEW_IRR",
            ])
            .description("Wave maker type to use in simulation"),
        ParameterSpec::new("AMP", Float, WaveMaker)
            .required()
            .mask(Mask::PositiveDefinite)
            .description("Amplitude of the solitary wave")
            .depends_on("WAVEMAKER", "LEF_SOL"),
        ParameterSpec::new("DEP", Float, WaveMaker)
            .required()
            .mask(Mask::PositiveDefinite)
            .description("Water depth at the solitary wave")
            .depends_on("WAVEMAKER", "LEF_SOL"),
        ParameterSpec::new("LAGTIME", Float, WaveMaker)
            .mask(Mask::Positive)
            .default_value(0.0)
            .description("Time lag of the solitary wave")
            .depends_on("WAVEMAKER", "LEF_SOL"),
        ParameterSpec::new("NumWaveComp", Integer, WaveMaker)
            .required()
            .mask(Mask::Positive)
            .description("Number of wave components in the wave component file")
            .depends_on("WAVEMAKER", "WK_TIME"),
        ParameterSpec::new("PeakPeriod", Float, WaveMaker)
            .required()
            .mask(Mask::Positive)
            .description("Peak period of the wave components")
            .depends_on("WAVEMAKER", "WK_TIME"),
        ParameterSpec::new("Xc_WK", Float, WaveMaker)
            .required()
            .mask(Mask::Positive)
            .description("x coordinate of the wavemaker center")
            .depends_on("WAVEMAKER", "WK_TIME"),
        ParameterSpec::new("Yc_WK", Float, WaveMaker)
            .mask(Mask::Positive)
            .default_value(0.0)
            .description("y coordinate of the wavemaker center")
            .depends_on("WAVEMAKER", "WK_TIME"),
        ParameterSpec::new("DEP_WK", Float, WaveMaker)
            .required()
            .mask(Mask::Positive)
            .default_value(0.0)
            .description("Water depth at the wavemaker")
            .depends_on("WAVEMAKER", "WK_TIME"),
        ParameterSpec::new("Time_ramp", Float, WaveMaker)
            .mask(Mask::Positive)
            .default_value(0.0)
            .description("Ramp-up time of the wavemaker")
            .depends_on("WAVEMAKER", "WK_TIME"),
        ParameterSpec::new("Delta_WK", Float, WaveMaker)
            .mask(Mask::PositiveDefinite)
            .default_value(0.5)
            .description("Width parameter of the wavemaker source function")
            .depends_on("WAVEMAKER", "WK_TIME"),
        ParameterSpec::new("Ywidth_WK", Float, WaveMaker)
            .mask(Mask::Positive)
            .default_value(999999.0)
            .description("Width of the wavemaker in the y direction")
            .depends_on("WAVEMAKER", "WK_TIME"),
        ParameterSpec::new("SolitaryPositiveDirection", Bool, WaveMaker)
            .default_value(true)
            .description("Initial solitary wave travels in the positive x direction")
            .depends_on("WAVEMAKER", "INI_SOL"),
        ParameterSpec::new("XWAVEMAKER", Float, WaveMaker)
            .required()
            .mask(Mask::Positive)
            .description("x location of the initial solitary wave")
            .depends_on("WAVEMAKER", "INI_SOL"),
        ParameterSpec::new("x1_Nwave", Float, WaveMaker)
            .required()
            .mask(Mask::Positive)
            .description("First x location parameter of the N-wave")
            .depends_on("WAVEMAKER", "N_WAVE"),
        ParameterSpec::new("x2_Nwave", Float, WaveMaker)
            .required()
            .mask(Mask::Positive)
            .description("Second x location parameter of the N-wave")
            .depends_on("WAVEMAKER", "N_WAVE"),
        ParameterSpec::new("a0_Nwave", Float, WaveMaker)
            .required()
            .mask(Mask::Positive)
            .description("Amplitude of the N-wave")
            .depends_on("WAVEMAKER", "N_WAVE"),
        ParameterSpec::new("gamma_Nwave", Float, WaveMaker)
            .required()
            .mask(Mask::Positive)
            .description("Steepness parameter of the N-wave")
            .depends_on("WAVEMAKER", "N_WAVE"),
        ParameterSpec::new("dep_Nwave", Float, WaveMaker)
            .required()
            .mask(Mask::PositiveDefinite)
            .description("Water depth for the N-wave")
            .depends_on("WAVEMAKER", "N_WAVE"),
        ParameterSpec::new("Xc", Float, WaveMaker)
            .required()
            .mask(Mask::Positive)
            .description("x center of the initial rectangular hump")
            .depends_on("WAVEMAKER", "INI_REC"),
        ParameterSpec::new("Yc", Float, WaveMaker)
            .mask(Mask::Positive)
            .default_value(0.0)
            .description("y center of the initial rectangular hump")
            .depends_on("WAVEMAKER", "INI_REC"),
        ParameterSpec::new("WID", Float, WaveMaker)
            .required()
            .description("Width of the initial rectangular hump")
            .depends_on("WAVEMAKER", "INI_REC"),
        ParameterSpec::new("Tperiod", Float, WaveMaker)
            .required()
            .mask(Mask::PositiveDefinite)
            .description("Period of the regular wave")
            .depends_on("WAVEMAKER", "WK_REG"),
        ParameterSpec::new("AMP_WK", Float, WaveMaker)
            .required()
            .mask(Mask::PositiveDefinite)
            .description("Amplitude of the regular wave")
            .depends_on("WAVEMAKER", "WK_REG"),
        ParameterSpec::new("Theta_WK", Float, WaveMaker)
            .default_value(0.0)
            .description("Direction of the regular wave in degrees")
            .depends_on("WAVEMAKER", "WK_REG"),
        ParameterSpec::new("alpha_c", Float, WaveMaker)
            .mask(Mask::Positive)
            .default_value(0.0)
            .description("Alpha coefficient of the new irregular wavemaker")
            .depends_on("WAVEMAKER", "WK_NEW_IRR"),
        ParameterSpec::new("EqualEnergy", Bool, WaveMaker)
            .default_value(false)
            .description("Use equal energy frequency bins")
            .depends_on("WAVEMAKER", "WK_IRR"),
        ParameterSpec::new("WAVE_DATA_TYPE", Enum, WaveMaker)
            .tokens(["ABS", "DATA", "TMA_1D", "JON_1D", "JON_2D"])
            .description("Wave data type of the absorbing-generating boundary")
            .depends_on("WAVEMAKER", "ABS"),
        ParameterSpec::new("DepthWaveMaker", Float, WaveMaker)
            .mask(Mask::PositiveDefinite)
            .description("Water depth at the absorbing-generating boundary")
            .depends_on("WAVEMAKER", "ABS"),
        ParameterSpec::new("ETA_LIMITER", Bool, WaveMaker)
            .default_value(false)
            .description("Limit the surface elevation inside the wavemaker region")
            .depends_on("WAVEMAKER", "LEF_SOL"),
        ParameterSpec::new("WaveMakerCd", Float, WaveMaker)
            .description("Drag coefficient inside the wavemaker region")
            .depends_on("WAVEMAKER", "LEF_SOL"),
        ParameterSpec::new("WaveCompFile", Path, WaveMaker)
            .required()
            .description("Path to the wave component file")
            .depends_on("WAVEMAKER", ["WK_TIME", "WK_NEW_DATA2D", "WK_DATA2D"])
            .depends_on("WAVE_DATA_TYPE", "DATA"),
        ParameterSpec::new("FreqPeak", Float, WaveMaker)
            .required()
            .mask(Mask::PositiveDefinite)
            .description("Peak frequency of the spectrum")
            .depends_on("WAVEMAKER", ["WK_IRR", "TMA_1D", "JON_1D", "JON_2D", "WK_NEW_IRR"])
            .depends_on("WAVE_DATA_TYPE", ["TMA_1D", "JON_1D", "JON_2D"]),
        ParameterSpec::new("FreqMin", Float, WaveMaker)
            .required()
            .mask(Mask::PositiveDefinite)
            .description("Minimum frequency of the spectrum")
            .depends_on("WAVEMAKER", ["WK_IRR", "TMA_1D", "JON_1D", "JON_2D", "WK_NEW_IRR"])
            .depends_on("WAVE_DATA_TYPE", ["TMA_1D", "JON_1D", "JON_2D"]),
        ParameterSpec::new("FreqMax", Float, WaveMaker)
            .required()
            .mask(Mask::PositiveDefinite)
            .description("Maximum frequency of the spectrum")
            .depends_on("WAVEMAKER", ["WK_IRR", "TMA_1D", "JON_1D", "JON_2D", "WK_NEW_IRR"])
            .depends_on("WAVE_DATA_TYPE", ["TMA_1D", "JON_1D", "JON_2D"]),
        ParameterSpec::new("Hmo", Float, WaveMaker)
            .required()
            .mask(Mask::PositiveDefinite)
            .description("Significant wave height")
            .depends_on("WAVEMAKER", ["WK_IRR", "TMA_1D", "JON_1D", "JON_2D", "WK_NEW_IRR"])
            .depends_on("WAVE_DATA_TYPE", ["TMA_1D", "JON_1D", "JON_2D"]),
        ParameterSpec::new("Nfreq", Integer, WaveMaker)
            .mask(Mask::PositiveDefinite)
            .default_value(45)
            .description("Number of frequency bins")
            .depends_on("WAVEMAKER", ["WK_IRR", "TMA_1D", "JON_1D", "JON_2D", "WK_NEW_IRR"])
            .depends_on("WAVE_DATA_TYPE", ["TMA_1D", "JON_1D", "JON_2D"]),
        ParameterSpec::new("Ntheta", Integer, WaveMaker)
            .mask(Mask::PositiveDefinite)
            .default_value(24)
            .description("Number of direction bins")
            .depends_on("WAVEMAKER", ["WK_IRR", "JON_2D", "WK_NEW_IRR"])
            .depends_on("WAVE_DATA_TYPE", "JON_2D"),
        ParameterSpec::new("ThetaPeak", Float, WaveMaker)
            .default_value(0.0)
            .description("Peak direction in degrees")
            .depends_on("WAVEMAKER", ["WK_IRR", "JON_2D", "WK_NEW_IRR"])
            .depends_on("WAVE_DATA_TYPE", "JON_2D"),
        ParameterSpec::new("Sigma_Theta", Float, WaveMaker)
            .mask(Mask::PositiveDefinite)
            .default_value(10.0)
            .description("Directional spreading in degrees")
            .depends_on("WAVEMAKER", ["WK_IRR", "JON_2D", "WK_NEW_IRR"])
            .depends_on("WAVE_DATA_TYPE", "JON_2D"),
        ParameterSpec::new("WidthWaveMaker", Float, WaveMaker)
            .required()
            .mask(Mask::PositiveDefinite)
            .description("Width of the absorbing-generating region")
            .depends_on("WAVE_DATA_TYPE", "ABS"),
        ParameterSpec::new("R_sponge_wavemaker", Float, WaveMaker)
            .required()
            .mask(Mask::PositiveDefinite)
            .description("Decay rate of the absorbing-generating sponge")
            .depends_on("WAVE_DATA_TYPE", "ABS"),
        ParameterSpec::new("A_sponge_wavemaker", Float, WaveMaker)
            .required()
            .mask(Mask::PositiveDefinite)
            .description("Maximum damping of the absorbing-generating sponge")
            .depends_on("WAVE_DATA_TYPE", "ABS"),
        ParameterSpec::new("CrestLimit", Float, WaveMaker)
            .required()
            .mask(Mask::PositiveDefinite)
            .description("Maximum crest elevation inside the wavemaker region")
            .depends_on("ETA_LIMITER", true),
        ParameterSpec::new("TroughLimit", Float, WaveMaker)
            .required()
            .mask(Mask::PositiveDefinite)
            .description("Maximum trough depth inside the wavemaker region")
            .depends_on("ETA_LIMITER", true),
    ]
}

fn obstacles() -> Vec<ParameterSpec> {
    vec![
        ParameterSpec::new("OBSTACLE_FILE", Path, ObsAndBrkwtr)
            .description("Path to the obstacle mask file"),
        ParameterSpec::new("BREAKWATER_FILE", Path, ObsAndBrkwtr)
            .description("Path to the breakwater absorption file"),
        ParameterSpec::new("BreakWaterAbsorbCoef", Float, ObsAndBrkwtr)
            .default_value(10.0)
            .description("Absorption coefficient of the breakwater")
            .depends_on("BREAKWATER_FILE", Requirement::Defined),
    ]
}

fn hot_start() -> Vec<ParameterSpec> {
    vec![
        ParameterSpec::new("INI_UVZ", Bool, HotStart)
            .default_value(false)
            .description("Flag for using hot start mode. Allows specifying initial free surface height (eta) and velocities (u, v) for run"),
        ParameterSpec::new("BED_DEFORMATION", Bool, HotStart)
            .default_value(false)
            .description("Read a time-varying bed deformation")
            .depends_on("INI_UVZ", true),
        ParameterSpec::new("ETA_FILE", Path, HotStart)
            .required()
            .description("Path to initial free surface height at grid points to initialize run with")
            .depends_on("INI_UVZ", true),
        ParameterSpec::new("U_FILE", Path, HotStart)
            .description("Optional path to initial x-direction velocities, u, at grid points for hot start mode")
            .depends_on("INI_UVZ", true),
        ParameterSpec::new("V_FILE", Path, HotStart)
            .description("Optional path to initial y-direction velocities, v, at grid points for hot start mode")
            .depends_on("INI_UVZ", true),
        ParameterSpec::new("MASK_FILE", Path, HotStart)
            .description("Path to the initial wet/dry mask")
            .depends_on("INI_UVZ", true),
        ParameterSpec::new("HotStartTime", Float, HotStart)
            .mask(Mask::Positive)
            .default_value(0.0)
            .description("Optional offset for initial start time of hot start run")
            .depends_on("INI_UVZ", true),
        ParameterSpec::new("OutputStartNumber", Integer, HotStart)
            .mask(Mask::Positive)
            .default_value(1)
            .description("Optional offset number for field data file output numbers in hot start run")
            .depends_on("INI_UVZ", true),
    ]
}

fn parallel() -> Vec<ParameterSpec> {
    vec![
        ParameterSpec::new("PARALLEL", Flag, Parallel)
            .full_name("Parallel")
            .default_value(false)
            .description("FORTRAN compile flag for turning on parallel computations"),
        ParameterSpec::new("PX", Integer, Parallel)
            .mask(Mask::PositiveDefinite)
            .default_value(1)
            .description("Number for parallel cores/threads to use in x direction")
            .depends_on("PARALLEL", true),
        ParameterSpec::new("PY", Integer, Parallel)
            .mask(Mask::PositiveDefinite)
            .default_value(1)
            .description("Number for parallel cores/threads to use in y direction")
            .depends_on("PARALLEL", true),
    ]
}
